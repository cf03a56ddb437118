//! Layout engine tests: grid placement, paging, truncation and the footer.

mod common;

use common::{hazard, label};
use hazlabel_core::{
    DrawOp, Font, HelveticaMetrics, Label, RenderPlan, SignalWord, TextMeasurer, TextRole, render,
    render_with,
};
use hazlabel_format::{LabelFormat, preset};

fn format(name: &str) -> LabelFormat {
    preset(name).unwrap()
}

fn bleach() -> Label {
    label(
        "Sodium Hypochlorite Bleach",
        &["H314", "H290"],
        &["P280", "P260", "P305+P351+P338", "P405", "P501"],
    )
}

/// Every hazard code in the table, enough to overflow any preset.
fn overloaded() -> Label {
    let hazards: Vec<&str> = hazlabel_core::list_hazard_codes()
        .iter()
        .map(|h| h.code)
        .take(40)
        .collect();
    label("Everything Mix", &hazards, &["P280", "P210", "P501"])
}

// ─── Grid placement and paging ───────────────────────────────────────────────

#[test]
fn one_label_per_page_formats_break_every_label() {
    let labels = vec![bleach(), bleach(), bleach()];
    let plans = render(&labels, &format("letter_full"));
    assert_eq!(plans.len(), 3);
    let pages: Vec<_> = plans.iter().map(|p| p.page).collect();
    assert_eq!(pages, [0, 1, 2]);
    let breaks: Vec<_> = plans.iter().map(|p| p.page_break_before).collect();
    assert_eq!(breaks, [false, true, true]);
}

#[test]
fn sheets_fill_row_major_then_page() {
    let f = format("avery_5163");
    let labels = vec![bleach(); 12];
    let plans = render(&labels, &f);

    assert_eq!((plans[0].column, plans[0].row), (0, 0));
    assert_eq!((plans[1].column, plans[1].row), (1, 0));
    assert_eq!((plans[3].column, plans[3].row), (1, 1));
    assert!(plans[1].x > plans[0].x);
    assert!(plans[2].y < plans[0].y);

    assert_eq!(plans[9].page, 0);
    assert!(!plans[9].page_break_before);
    assert_eq!((plans[10].page, plans[10].slot), (1, 0));
    assert!(plans[10].page_break_before);
    assert!((plans[10].x - plans[0].x).abs() < 1e-9);
    assert!((plans[10].y - plans[0].y).abs() < 1e-9);
}

#[test]
fn unrenderable_labels_do_not_take_a_cell() {
    let empty = Label {
        hazard_statements: Vec::new(),
        ..bleach()
    };
    let nameless = Label {
        product_identifier: " ".into(),
        ..bleach()
    };
    let labels = vec![bleach(), empty, nameless, bleach()];
    let plans = render(&labels, &format("avery_5163"));
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].source_index, 0);
    assert_eq!(plans[1].source_index, 3);
    assert_eq!(plans[1].slot, 1);
}

#[test]
fn no_labels_no_plans() {
    assert!(render(&[], &format("ghs_4x4")).is_empty());
}

// ─── Content ─────────────────────────────────────────────────────────────────

#[test]
fn label_blocks_are_drawn_top_to_bottom() {
    let plans = render(&[bleach()], &format("ghs_4x4"));
    let plan = &plans[0];
    assert!(!plan.is_truncated());
    assert!(matches!(plan.ops[0], DrawOp::Border { .. }));

    let y_of = |role: TextRole| {
        plan.ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { role: r, y, .. } if *r == role => Some(*y),
                _ => None,
            })
            .unwrap()
    };
    assert!(y_of(TextRole::ProductCaption) > y_of(TextRole::ProductName));
    assert!(y_of(TextRole::ProductName) > y_of(TextRole::SignalWord));
    assert!(y_of(TextRole::SignalWord) > y_of(TextRole::HazardCode));
    assert!(y_of(TextRole::HazardCode) > y_of(TextRole::PrecautionCode));
    assert!(y_of(TextRole::PrecautionCode) > y_of(TextRole::Supplier));

    assert_eq!(plan.texts(TextRole::SignalWord).collect::<Vec<_>>(), ["DANGER"]);
    assert_eq!(
        plan.texts(TextRole::HazardCode).collect::<Vec<_>>(),
        ["- H314:", "- H290:"]
    );
    assert_eq!(
        plan.texts(TextRole::PrecautionCode).collect::<Vec<_>>(),
        ["P280:", "P260:", "P305+P351+P338:", "P405:", "P501:"]
    );
    assert_eq!(
        plan.pictograms().collect::<Vec<_>>(),
        [hazlabel_core::Pictogram::Corrosion, hazlabel_core::Pictogram::ExclamationMark]
    );
}

#[test]
fn supplemental_statements_follow_hazards() {
    let with_supplemental = Label {
        supplemental_statements: vec![hazard("EUH031")],
        ..bleach()
    };
    let plans = render(&[with_supplemental], &format("ghs_4x4"));
    assert_eq!(
        plans[0].texts(TextRole::HazardCode).collect::<Vec<_>>(),
        ["- H314:", "- H290:", "- EUH031:"]
    );
}

#[test]
fn no_signal_word_draws_nothing() {
    let quiet = Label {
        signal_word: SignalWord::None,
        ..bleach()
    };
    let plans = render(&[quiet], &format("avery_5163"));
    assert_eq!(plans[0].texts(TextRole::SignalWord).count(), 0);
}

#[test]
fn long_product_names_are_cut() {
    let long = Label {
        product_identifier: "Concentrated ".repeat(12),
        ..bleach()
    };
    let plans = render(&[long], &format("avery_5163"));
    let name = plans[0].texts(TextRole::ProductName).next().unwrap();
    assert!(name.chars().count() <= 63);
    assert!(name.ends_with("..."));
}

// ─── Truncation ──────────────────────────────────────────────────────────────

#[test]
fn overflow_omits_statements_whole_and_in_order() {
    let full = overloaded();
    let plans = render(std::slice::from_ref(&full), &format("avery_5160"));
    let plan = &plans[0];
    assert!(plan.is_truncated());

    // Drawn hazards are a prefix; omitted hazards are the remaining suffix.
    let drawn = plan.texts(TextRole::HazardCode).count();
    assert!(drawn < full.hazard_statements.len());
    assert_eq!(plan.omitted_hazards, full.hazard_statements[drawn..]);
    // Once a hazard is dropped, no precaution is drawn.
    assert_eq!(plan.texts(TextRole::PrecautionCode).count(), 0);
    assert_eq!(plan.omitted_precautions.len(), full.precautionary_statements.len());
}

#[test]
fn footer_is_always_drawn() {
    for name in hazlabel_format::preset_names() {
        let plans = render(&[overloaded(), bleach()], &format(name));
        for plan in &plans {
            let suppliers: Vec<_> = plan.texts(TextRole::Supplier).collect();
            assert_eq!(suppliers.len(), 1, "{name}");
            assert!(suppliers[0].starts_with("Acme Chemical"), "{name}");
        }
    }
}

fn assert_inside(name: &str, plan: &RenderPlan) {
    let (left, right) = (plan.x, plan.x + plan.width);
    let (bottom, top) = (plan.y, plan.y + plan.height);
    for op in &plan.ops {
        match op {
            DrawOp::Text { x, y, .. } => {
                assert!(*x >= left && *x < right, "{name}: {op:?}");
                assert!(*y >= bottom && *y <= top, "{name}: {op:?}");
            }
            DrawOp::Pictogram {
                center_x, center_y, ..
            } => {
                assert!(*center_x > left && *center_x < right, "{name}: {op:?}");
                assert!(*center_y > bottom && *center_y < top, "{name}: {op:?}");
            }
            DrawOp::Border { .. } => {}
        }
    }
}

#[test]
fn drawing_stays_inside_the_label() {
    for name in hazlabel_format::preset_names() {
        for plan in &render(&[bleach(), overloaded()], &format(name)) {
            assert_inside(name, plan);
        }
    }
}

#[test]
fn short_custom_labels_keep_text_inside() {
    for (width, height) in [(2.0, 0.3), (2.0, 0.6), (1.0, 0.1), (4.0, 0.9)] {
        let f = LabelFormat::custom(width, height, 1).unwrap();
        for plan in &render(&[bleach(), overloaded()], &f) {
            assert_inside(&f.id, plan);
            assert_eq!(plan.texts(TextRole::Supplier).count(), 1, "{}", f.id);
        }
    }
}

#[test]
fn header_lines_that_do_not_fit_are_reported() {
    let f = LabelFormat::custom(2.0, 0.3, 1).unwrap();
    let plan = &render(&[label("Drain Opener", &["H314"], &["P280"])], &f)[0];

    assert!(plan.is_truncated());
    assert_eq!(
        plan.omitted_header,
        [TextRole::ProductCaption, TextRole::SignalWord]
    );
    assert_eq!(plan.texts(TextRole::ProductName).collect::<Vec<_>>(), ["Drain Opener"]);
    assert_eq!(plan.texts(TextRole::SignalWord).count(), 0);
    assert_eq!(plan.omitted_hazards.len(), 1);

    let roomy = &render(&[label("Drain Opener", &["H314"], &["P280"])], &format("ghs_4x4"))[0];
    assert!(roomy.omitted_header.is_empty());
}

// ─── Measurement ─────────────────────────────────────────────────────────────

/// Helvetica at twice the width.
struct Wide;

impl TextMeasurer for Wide {
    fn text_width(&self, text: &str, font: Font, size: f64) -> f64 {
        2.0 * HelveticaMetrics.text_width(text, font, size)
    }
}

#[test]
fn custom_measurer_changes_wrapping() {
    let labels = [label("Drain Opener", &["H314", "H290"], &[])];
    let f = format("ghs_4x4");
    let normal = render(&labels, &f);
    let wide = render_with(&Wide, &labels, &f);
    assert!(!wide[0].is_truncated());
    assert_eq!(
        wide[0].texts(TextRole::HazardCode).collect::<Vec<_>>(),
        ["- H314:", "- H290:"]
    );
    let lines = |plan: &hazlabel_core::RenderPlan| plan.texts(TextRole::HazardText).count();
    assert!(lines(&wide[0]) > lines(&normal[0]));
}
