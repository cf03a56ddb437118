//! Label Layout Engine.
//!
//! [`render`] places each corrected [`Label`] in the next cell of a
//! [`LabelFormat`] grid and lays out its blocks top to bottom: product
//! identifier, signal word, hazard statements, precautionary statements and
//! the supplier footer, with the pictograms stacked in a column on the right.
//!
//! Statements are drawn whole or not at all. When the hazard block runs out
//! of room, the rest of the hazards and every precautionary statement are
//! left off; the footer is always drawn.

pub mod measure;
pub mod plan;
pub mod text;

use hazlabel_format::{GridSlot, LabelFormat, POINTS_PER_INCH};
use hazlabel_registry::PrecautionGroup;
use std::f64::consts::SQRT_2;

use self::measure::{Font, HelveticaMetrics, TextMeasurer};
use self::plan::{DrawOp, RenderPlan, Rgb, TextRole};
use self::text::{clean_statement_text, compact_supplier, truncate_to_width, wrap_text};
use crate::label::{Label, SignalWord};
use crate::statement::Statement;

const INCH: f64 = POINTS_PER_INCH;

/// Scale bounds for multi-up sheets.
pub const SCALE_RANGE: (f64, f64) = (0.8, 1.6);
/// Scale bounds for full-page formats.
pub const FULL_PAGE_SCALE_RANGE: (f64, f64) = (1.2, 2.4);
/// Longest product name printed.
pub const PRODUCT_NAME_MAX_CHARS: usize = 60;

const BASE_WIDTH: f64 = 4.0 * INCH;
const BASE_HEIGHT: f64 = 2.0 * INCH;
const PADDING: f64 = 0.15 * INCH;
const PRODUCT_CAPTION: &str = "Product Identifier:";
const PPE_CODE: &str = "P280";

/// Lay out every renderable label with Helvetica metrics.
///
/// Labels that are not renderable ([`Label::is_renderable`]) are skipped and
/// do not take up a grid cell.
pub fn render(labels: &[Label], format: &LabelFormat) -> Vec<RenderPlan> {
    render_with(&HelveticaMetrics, labels, format)
}

/// [`render`] with a caller-supplied text measurer.
pub fn render_with(
    measurer: &dyn TextMeasurer,
    labels: &[Label],
    format: &LabelFormat,
) -> Vec<RenderPlan> {
    let mut plans = Vec::with_capacity(labels.len());
    let mut counter = 0usize;
    for (index, label) in labels.iter().enumerate() {
        if !label.is_renderable() {
            tracing::debug!(index, "label has nothing to render; skipped");
            continue;
        }
        let slot = format.slot(counter);
        let page_break_before = counter > 0 && slot.slot == 0;
        plans.push(layout_label(measurer, label, format, slot, index, page_break_before));
        counter += 1;
    }
    tracing::debug!(
        format = %format.id,
        labels = plans.len(),
        pages = plans.last().map_or(0, |p| p.page + 1),
        "render complete"
    );
    plans
}

/// Uniform scale for a format: the square root of the area ratio against a
/// 4 × 2 in label, clamped to [`SCALE_RANGE`].
///
/// Full-page formats are clamped again to [`FULL_PAGE_SCALE_RANGE`], which
/// lifts the floor but leaves the multi-up ceiling in force.
pub fn scale_for(format: &LabelFormat) -> f64 {
    let raw = ((format.label_height_pt() / BASE_HEIGHT) * (format.label_width_pt() / BASE_WIDTH))
        .sqrt();
    let scale = raw.clamp(SCALE_RANGE.0, SCALE_RANGE.1);
    if format.full_page {
        scale.clamp(FULL_PAGE_SCALE_RANGE.0, FULL_PAGE_SCALE_RANGE.1)
    } else {
        scale
    }
}

/// Pictogram size factor by count.
fn count_factor(count: usize) -> f64 {
    match count {
        0 | 1 => 1.0,
        2 => 0.85,
        3 => 0.70,
        _ => 0.60,
    }
}

fn font_size(base: f64, scale: f64) -> f64 {
    (base * scale).floor().max(base)
}

/// Sizes and offsets derived from the scale.
struct Metrics {
    caption: f64,
    product: f64,
    signal: f64,
    statement: f64,
    precaution: f64,
    supplier: f64,
    spacing_small: f64,
    spacing_medium: f64,
    spacing_large: f64,
    line_height: f64,
}

impl Metrics {
    fn new(s: f64) -> Self {
        Self {
            caption: font_size(6.0, s),
            product: font_size(10.0, s),
            signal: font_size(14.0, s),
            statement: font_size(7.0, s),
            precaution: font_size(6.0, s),
            supplier: font_size(5.0, s),
            spacing_small: 0.12 * INCH * s,
            spacing_medium: 0.16 * INCH * s,
            spacing_large: 0.22 * INCH * s,
            line_height: 0.11 * INCH * s,
        }
    }
}

/// Per-label drawing state.
struct Canvas<'a> {
    measurer: &'a dyn TextMeasurer,
    ops: Vec<DrawOp>,
    inner_x: f64,
    text_width: f64,
    scale: f64,
}

impl Canvas<'_> {
    #[allow(clippy::too_many_arguments)]
    fn text(&mut self, x: f64, y: f64, font: Font, size: f64, color: Rgb, text: String, role: TextRole) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            font,
            size,
            color,
            text,
            role,
        });
    }

    fn width(&self, text: &str, font: Font, size: f64) -> f64 {
        self.measurer.text_width(text, font, size)
    }
}

/// One line of the product/signal-word header.
struct HeaderLine {
    text: String,
    font: Font,
    size: f64,
    color: Rgb,
    role: TextRole,
    advance: f64,
}

/// A statement broken into a bold lead and wrapped description lines.
struct StatementBlock {
    lead: String,
    lead_width: f64,
    lines: Vec<String>,
}

impl StatementBlock {
    /// Baseline drop from the first line to the last.
    fn depth(&self, wrapped_step: f64) -> f64 {
        self.lines.len().saturating_sub(1) as f64 * wrapped_step
    }
}

fn layout_label(
    measurer: &dyn TextMeasurer,
    label: &Label,
    format: &LabelFormat,
    slot: GridSlot,
    source_index: usize,
    page_break_before: bool,
) -> RenderPlan {
    let s = scale_for(format);
    let m = Metrics::new(s);
    let (x, y) = (slot.x, slot.y);
    let width = format.label_width_pt();
    let height = format.label_height_pt();
    let top = y + height;

    let content_width = width - 2.0 * PADDING;
    let column_pct = if height >= 3.0 * INCH { 0.30 } else { 0.25 };
    let picto_width = content_width * column_pct;

    let mut canvas = Canvas {
        measurer,
        ops: vec![DrawOp::Border {
            x,
            y,
            width,
            height,
        }],
        inner_x: x + PADDING,
        text_width: content_width - picto_width,
        scale: s,
    };

    // ── Header ──────────────────────────────────────────────────────────
    let footer_y = y + (0.08 * INCH * s).min((height - m.supplier).max(0.0));
    let header_floor = footer_y + m.supplier;
    let name: String = label
        .product_identifier
        .trim()
        .chars()
        .take(PRODUCT_NAME_MAX_CHARS)
        .collect();
    let name = truncate_to_width(measurer, &name, Font::Bold, m.product, canvas.text_width);
    let signal_color = match label.signal_word {
        SignalWord::Danger => Rgb::RED,
        SignalWord::Warning => Rgb::ORANGE,
        SignalWord::None => Rgb::BLACK,
    };

    // The caption is the first line given up when the label is short.
    let mut omitted_header = Vec::new();
    let mut header = Vec::with_capacity(3);
    let header_depth = m.spacing_medium + m.spacing_small + m.spacing_medium;
    if top - header_depth >= header_floor {
        header.push(HeaderLine {
            text: PRODUCT_CAPTION.to_string(),
            font: Font::Regular,
            size: m.caption,
            color: Rgb::GREY,
            role: TextRole::ProductCaption,
            advance: m.spacing_small,
        });
    } else {
        omitted_header.push(TextRole::ProductCaption);
    }
    header.push(HeaderLine {
        text: name,
        font: Font::Bold,
        size: m.product,
        color: Rgb::BLACK,
        role: TextRole::ProductName,
        advance: m.spacing_medium,
    });
    if label.signal_word != SignalWord::None {
        header.push(HeaderLine {
            text: label.signal_word.as_str().to_uppercase(),
            font: Font::Bold,
            size: m.signal,
            color: signal_color,
            role: TextRole::SignalWord,
            advance: m.spacing_large,
        });
    }

    let mut cursor = top - m.spacing_medium;
    for line in header {
        if cursor < header_floor {
            omitted_header.push(line.role);
        } else {
            let x = canvas.inner_x;
            canvas.text(x, cursor, line.font, line.size, line.color, line.text, line.role);
        }
        cursor -= line.advance;
    }
    if label.signal_word == SignalWord::None {
        cursor -= m.spacing_large;
    }

    // ── Pictograms ──────────────────────────────────────────────────────
    place_pictograms(&mut canvas, label, y, height, picto_width);

    // ── Hazard statements ───────────────────────────────────────────────
    let hazard_bottom = y + 0.35 * INCH * s;
    let wrapped_step = m.line_height * 0.85;
    let hazards = label
        .hazard_statements
        .iter()
        .chain(&label.supplemental_statements);
    let mut omitted_hazards = Vec::new();
    for statement in hazards {
        if !omitted_hazards.is_empty() {
            omitted_hazards.push(statement.clone());
            continue;
        }
        let block = statement_block(
            &canvas,
            statement,
            m.statement,
            0.12 * INCH * s,
            |code| format!("- {code}:"),
            "-",
        );
        if cursor < hazard_bottom || cursor - block.depth(wrapped_step) < hazard_bottom {
            omitted_hazards.push(statement.clone());
            continue;
        }
        cursor = draw_block(
            &mut canvas,
            block,
            cursor,
            m.statement,
            wrapped_step,
            0.12 * INCH * s,
            (TextRole::HazardCode, TextRole::HazardText),
        );
        cursor -= m.line_height;
    }
    cursor -= m.spacing_small * 0.5;

    // ── Precautionary statements ────────────────────────────────────────
    let precaution_bottom = footer_y + m.supplier;
    let wrapped_step = m.line_height * 0.7;
    let mut omitted_precautions = Vec::new();
    for statement in ordered_precautions(&label.precautionary_statements) {
        if !omitted_hazards.is_empty() || !omitted_precautions.is_empty() {
            omitted_precautions.push(statement.to_string());
            continue;
        }
        let block = statement_block(
            &canvas,
            statement,
            m.precaution,
            0.08 * INCH * s,
            |code| format!("{code}:"),
            "",
        );
        if cursor < precaution_bottom || cursor - block.depth(wrapped_step) < precaution_bottom {
            omitted_precautions.push(statement.to_string());
            continue;
        }
        cursor = draw_block(
            &mut canvas,
            block,
            cursor,
            m.precaution,
            wrapped_step,
            0.08 * INCH * s,
            (TextRole::PrecautionCode, TextRole::PrecautionText),
        );
        cursor -= m.line_height * 0.8;
    }

    if !omitted_header.is_empty() {
        tracing::warn!(
            source_index,
            lines = ?omitted_header,
            "label too short for its header"
        );
    }
    if !omitted_hazards.is_empty() || !omitted_precautions.is_empty() {
        tracing::debug!(
            source_index,
            hazards = omitted_hazards.len(),
            precautions = omitted_precautions.len(),
            "statements omitted for space"
        );
    }

    // ── Footer ──────────────────────────────────────────────────────────
    let supplier = truncate_to_width(
        measurer,
        &compact_supplier(&label.supplier_info),
        Font::Regular,
        m.supplier,
        canvas.text_width,
    );
    canvas.text(
        canvas.inner_x,
        footer_y,
        Font::Regular,
        m.supplier,
        Rgb::GREY,
        supplier,
        TextRole::Supplier,
    );

    RenderPlan {
        source_index,
        page: slot.page,
        slot: slot.slot,
        column: slot.column,
        row: slot.row,
        page_break_before,
        x,
        y,
        width,
        height,
        scale: s,
        ops: canvas.ops,
        omitted_hazards,
        omitted_precautions,
        omitted_header,
    }
}

/// Stack the label's pictograms, centred in the right-hand column.
fn place_pictograms(canvas: &mut Canvas<'_>, label: &Label, y: f64, height: f64, column: f64) {
    let count = label.pictograms.len();
    if count == 0 {
        return;
    }
    let s = canvas.scale;
    let (mut top_margin, mut bottom_margin) = (0.15 * INCH * s, 0.18 * INCH * s);
    if top_margin + bottom_margin >= height {
        (top_margin, bottom_margin) = (0.0, 0.0);
    }
    let available = height - top_margin - bottom_margin;
    let mut gap = if count > 1 { 0.02 * INCH * s } else { 0.0 };
    if gap * count as f64 >= available {
        gap = 0.0;
    }
    let gaps = gap * (count - 1) as f64;

    let mut size = column * 0.85 / SQRT_2 * count_factor(count);
    if count as f64 * size * SQRT_2 + gaps > available {
        size = ((available - gaps) / (count as f64 * SQRT_2)).max(0.0);
    }
    let span = size * SQRT_2;
    let total = count as f64 * span + gaps;
    let start_offset = (available - total) / 2.0;

    let center_x = canvas.inner_x + canvas.text_width + column / 2.0;
    let first_y = y + height - top_margin - start_offset - span / 2.0;
    for (i, &pictogram) in label.pictograms.iter().enumerate() {
        canvas.ops.push(DrawOp::Pictogram {
            center_x,
            center_y: first_y - i as f64 * (span + gap),
            size,
            rotation_deg: 45.0,
            pictogram,
        });
    }
}

/// Split a statement into its lead and wrapped, cleaned description.
fn statement_block(
    canvas: &Canvas<'_>,
    statement: &str,
    size: f64,
    indent: f64,
    lead_for: impl Fn(&str) -> String,
    uncoded_lead: &str,
) -> StatementBlock {
    let parsed = Statement::parse(statement);
    let lead = parsed
        .code
        .as_deref()
        .map_or_else(|| uncoded_lead.to_string(), &lead_for);
    let lead_width = if lead.is_empty() {
        0.0
    } else {
        canvas.width(&lead, Font::Bold, size)
    };
    let gap = if lead.is_empty() { 0.0 } else { 2.0 * canvas.scale };
    let first_width = canvas.text_width - lead_width - 2.0 * gap;
    let wrap_width = first_width.min(canvas.text_width - indent).max(1.0);
    let description = clean_statement_text(&parsed.text);
    StatementBlock {
        lead,
        lead_width: lead_width + gap,
        lines: wrap_text(canvas.measurer, &description, Font::Regular, size, wrap_width),
    }
}

/// Draw a statement block at `cursor`; returns the baseline of its last line.
fn draw_block(
    canvas: &mut Canvas<'_>,
    block: StatementBlock,
    mut cursor: f64,
    size: f64,
    wrapped_step: f64,
    indent: f64,
    (lead_role, text_role): (TextRole, TextRole),
) -> f64 {
    let inner_x = canvas.inner_x;
    if !block.lead.is_empty() {
        canvas.text(inner_x, cursor, Font::Bold, size, Rgb::BLACK, block.lead, lead_role);
    }
    for (i, line) in block.lines.into_iter().enumerate() {
        let x = if i == 0 {
            inner_x + block.lead_width
        } else {
            cursor -= wrapped_step;
            inner_x + indent
        };
        canvas.text(x, cursor, Font::Regular, size, Rgb::BLACK, line, text_role);
    }
    cursor
}

/// Precautionary statements in print order: prevention (protective
/// equipment first), response, storage, disposal, then anything else.
/// Input order is kept within each group.
pub fn ordered_precautions(statements: &[String]) -> Vec<&str> {
    let rank = |statement: &str| -> u8 {
        let Some(code) = Statement::parse(statement).code else {
            return 6;
        };
        match PrecautionGroup::of(&code) {
            PrecautionGroup::Prevention if code.split('+').any(|c| c == PPE_CODE) => 0,
            PrecautionGroup::Prevention => 1,
            PrecautionGroup::Response => 2,
            PrecautionGroup::Storage => 3,
            PrecautionGroup::Disposal => 4,
            PrecautionGroup::General => 5,
            PrecautionGroup::Other => 6,
        }
    };
    let mut ranked: Vec<(u8, &str)> = statements.iter().map(|s| (rank(s), s.as_str())).collect();
    ranked.sort_by_key(|&(r, _)| r);
    ranked.into_iter().map(|(_, s)| s).collect()
}
