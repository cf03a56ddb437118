//! Physical label formats for hazlabel.
//!
//! A [`LabelFormat`] describes one label size and how labels tile a printed
//! page: grid columns and rows, page margins, and gutters between labels.
//! Dimensions are stored in inches; layout works in PDF points
//! ([`POINTS_PER_INCH`]) with the origin at the bottom-left corner of the
//! page.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// PDF points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Preset used when a requested preset name is unknown.
pub const DEFAULT_PRESET: &str = "avery_5163";

/// Slack allowed when checking that a grid fits its page, in inches.
const FIT_TOLERANCE_IN: f64 = 1e-6;

/// Errors that can occur when loading or validating a label format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// JSON deserialization failed.
    #[error("invalid format JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A field value is out of its valid range.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The name of the field that failed validation.
        field: String,
        /// A human-readable explanation of why the field value is invalid.
        reason: String,
    },
}

fn invalid(field: &str, reason: impl Into<String>) -> FormatError {
    FormatError::InvalidField {
        field: field.into(),
        reason: reason.into(),
    }
}

/// Physical page size in inches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PageSize {
    /// Page width in inches.
    pub width_in: f64,
    /// Page height in inches.
    pub height_in: f64,
}

impl PageSize {
    /// US Letter, 8.5 × 11 in.
    pub const LETTER: PageSize = PageSize {
        width_in: 8.5,
        height_in: 11.0,
    };
    /// ISO A4, 210 × 297 mm.
    pub const A4: PageSize = PageSize {
        width_in: 8.27,
        height_in: 11.69,
    };

    /// Width in points.
    pub fn width_pt(&self) -> f64 {
        self.width_in * POINTS_PER_INCH
    }

    /// Height in points.
    pub fn height_pt(&self) -> f64 {
        self.height_in * POINTS_PER_INCH
    }
}

/// A label sheet layout.
///
/// # Example
/// ```
/// let format = hazlabel_format::preset("ghs_4x4").unwrap();
/// assert_eq!(format.labels_per_page(), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelFormat {
    /// Format identifier (preset name, or a caller-chosen id).
    pub id: String,
    /// Printed page size.
    pub page: PageSize,
    /// Label width in inches.
    pub label_width_in: f64,
    /// Label height in inches.
    pub label_height_in: f64,
    /// Grid columns.
    pub columns: u32,
    /// Grid rows.
    pub rows: u32,
    /// Left page margin in inches.
    #[serde(default)]
    pub margin_left_in: f64,
    /// Top page margin in inches.
    #[serde(default)]
    pub margin_top_in: f64,
    /// Horizontal gap between labels in inches.
    #[serde(default)]
    pub gutter_x_in: f64,
    /// Vertical gap between labels in inches.
    #[serde(default)]
    pub gutter_y_in: f64,
    /// One label per page, centred. Text scales with its own bounds.
    #[serde(default)]
    pub full_page: bool,
    /// Labels placed per page before a page break. Defaults to
    /// `columns × rows`; may be smaller to leave trailing cells blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_per_page: Option<u32>,
}

/// Where one label lands on its page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSlot {
    /// Zero-based page number.
    pub page: usize,
    /// Cell index within the page.
    pub slot: usize,
    /// Grid column.
    pub column: u32,
    /// Grid row, counted from the top.
    pub row: u32,
    /// Left edge of the label in points.
    pub x: f64,
    /// Bottom edge of the label in points.
    pub y: f64,
}

impl LabelFormat {
    /// Labels placed on each page.
    pub fn labels_per_page(&self) -> u32 {
        self.labels_per_page
            .unwrap_or(self.columns.saturating_mul(self.rows))
            .max(1)
    }

    /// Label width in points.
    pub fn label_width_pt(&self) -> f64 {
        self.label_width_in * POINTS_PER_INCH
    }

    /// Label height in points.
    pub fn label_height_pt(&self) -> f64 {
        self.label_height_in * POINTS_PER_INCH
    }

    /// Grid position of the `counter`-th placed label.
    ///
    /// Pure in `counter`, so any label's position is known without laying out
    /// the labels before it.
    pub fn slot(&self, counter: usize) -> GridSlot {
        let per_page = self.labels_per_page() as usize;
        let page = counter / per_page;
        let slot = counter % per_page;

        if self.full_page {
            return GridSlot {
                page,
                slot,
                column: 0,
                row: 0,
                x: (self.page.width_pt() - self.label_width_pt()) / 2.0,
                y: (self.page.height_pt() - self.label_height_pt()) / 2.0,
            };
        }

        let columns = self.columns.max(1) as usize;
        let column = (slot % columns) as u32;
        let row = (slot / columns) as u32;
        let w = self.label_width_pt();
        let h = self.label_height_pt();
        let gx = self.gutter_x_in * POINTS_PER_INCH;
        let gy = self.gutter_y_in * POINTS_PER_INCH;
        let x = self.margin_left_in * POINTS_PER_INCH + f64::from(column) * (w + gx);
        let y = self.page.height_pt()
            - self.margin_top_in * POINTS_PER_INCH
            - f64::from(row) * (h + gy)
            - h;
        GridSlot {
            page,
            slot,
            column,
            row,
            x,
            y,
        }
    }

    /// A custom format on a Letter page.
    ///
    /// Columns are as many as fit across the page (at most
    /// `labels_per_page`); rows follow. Fails if the labels do not fit.
    pub fn custom(
        width_in: f64,
        height_in: f64,
        labels_per_page: u32,
    ) -> Result<LabelFormat, FormatError> {
        const MARGIN_IN: f64 = 0.25;
        const GUTTER_IN: f64 = 0.125;
        if labels_per_page == 0 {
            return Err(invalid("labels_per_page", "must be > 0"));
        }
        let page = PageSize::LETTER;
        let usable = page.width_in - MARGIN_IN + GUTTER_IN;
        let fit = (usable / (width_in + GUTTER_IN)).floor().max(1.0) as u32;
        let columns = fit.min(labels_per_page);
        let rows = labels_per_page.div_ceil(columns);
        let format = LabelFormat {
            id: format!("custom_{width_in}x{height_in}"),
            page,
            label_width_in: width_in,
            label_height_in: height_in,
            columns,
            rows,
            margin_left_in: MARGIN_IN,
            margin_top_in: MARGIN_IN,
            gutter_x_in: GUTTER_IN,
            gutter_y_in: GUTTER_IN,
            full_page: false,
            labels_per_page: Some(labels_per_page),
        };
        format.validate()?;
        Ok(format)
    }

    /// Structural validation.
    ///
    /// - `id` must be non-empty
    /// - page and label dimensions must be finite and > 0
    /// - `columns` and `rows` must be ≥ 1; full-page formats use exactly 1 × 1
    /// - margins and gutters must be finite and ≥ 0
    /// - `labels_per_page` (if present) must be in `1..=columns × rows`
    /// - the grid (or the single full-page label) must fit on the page
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.id.trim().is_empty() {
            return Err(invalid("id", "must not be empty"));
        }

        for (field, value) in [
            ("page.width_in", self.page.width_in),
            ("page.height_in", self.page.height_in),
            ("label_width_in", self.label_width_in),
            ("label_height_in", self.label_height_in),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("{value} must be > 0")));
            }
        }

        for (field, value) in [
            ("margin_left_in", self.margin_left_in),
            ("margin_top_in", self.margin_top_in),
            ("gutter_x_in", self.gutter_x_in),
            ("gutter_y_in", self.gutter_y_in),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("{value} must be >= 0")));
            }
        }

        if self.columns == 0 {
            return Err(invalid("columns", "must be >= 1"));
        }
        if self.rows == 0 {
            return Err(invalid("rows", "must be >= 1"));
        }
        if self.full_page && (self.columns != 1 || self.rows != 1) {
            return Err(invalid(
                "columns",
                format!(
                    "full-page formats use a 1x1 grid, got {}x{}",
                    self.columns, self.rows
                ),
            ));
        }

        let cells = self.columns.checked_mul(self.rows).ok_or_else(|| {
            invalid(
                "rows",
                format!("{}x{} grid is too large", self.columns, self.rows),
            )
        })?;
        if let Some(n) = self.labels_per_page {
            if n == 0 || n > cells {
                return Err(invalid(
                    "labels_per_page",
                    format!("{n} must be between 1 and {cells} (columns x rows)"),
                ));
            }
        }

        let (used_w, used_h) = if self.full_page {
            (self.label_width_in, self.label_height_in)
        } else {
            let cols = f64::from(self.columns);
            let rows = f64::from(self.rows);
            (
                self.margin_left_in
                    + cols * self.label_width_in
                    + (cols - 1.0) * self.gutter_x_in,
                self.margin_top_in
                    + rows * self.label_height_in
                    + (rows - 1.0) * self.gutter_y_in,
            )
        };
        if used_w > self.page.width_in + FIT_TOLERANCE_IN {
            return Err(invalid(
                "columns",
                format!(
                    "grid is {used_w:.3} in wide, page is {:.3} in",
                    self.page.width_in
                ),
            ));
        }
        if used_h > self.page.height_in + FIT_TOLERANCE_IN {
            return Err(invalid(
                "rows",
                format!(
                    "grid is {used_h:.3} in tall, page is {:.3} in",
                    self.page.height_in
                ),
            ));
        }

        Ok(())
    }
}

/// Load and validate a [`LabelFormat`] from a JSON string.
///
/// `id`, `page`, `label_width_in`, `label_height_in`, `columns` and `rows`
/// are required; margins and gutters default to 0. See
/// [`LabelFormat::validate`] for the checks applied after deserialization.
pub fn load_format_from_str(s: &str) -> Result<LabelFormat, FormatError> {
    let format: LabelFormat = serde_json::from_str(s)?;
    format.validate()?;
    Ok(format)
}

// ── Presets ─────────────────────────────────────────────────────────────

/// `(name, page, width, height, columns, rows, margin_left, margin_top,
/// gutter_x, gutter_y, full_page)`, dimensions in inches.
type PresetRow = (
    &'static str,
    PageSize,
    f64,
    f64,
    u32,
    u32,
    f64,
    f64,
    f64,
    f64,
    bool,
);

const PRESETS: &[PresetRow] = &[
    ("avery_5163", PageSize::LETTER, 4.0, 2.0, 2, 5, 0.1875, 0.5, 0.125, 0.0, false),
    ("avery_5164", PageSize::LETTER, 4.0, 3.33, 2, 3, 0.1875, 0.5, 0.125, 0.0, false),
    ("avery_5165", PageSize::LETTER, 8.5, 11.0, 1, 1, 0.0, 0.0, 0.0, 0.0, true),
    ("avery_5160", PageSize::LETTER, 2.625, 1.0, 3, 10, 0.1875, 0.5, 0.125, 0.0, false),
    ("ghs_4x4", PageSize::LETTER, 4.0, 4.0, 2, 2, 0.25, 0.5, 0.25, 0.25, false),
    ("ghs_4x2", PageSize::LETTER, 4.0, 2.0, 2, 5, 0.1875, 0.5, 0.125, 0.0, false),
    ("ghs_2x2", PageSize::LETTER, 2.0, 2.0, 4, 5, 0.25, 0.5, 0.0, 0.125, false),
    ("letter_full", PageSize::LETTER, 7.5, 10.0, 1, 1, 0.5, 0.5, 0.0, 0.0, true),
    ("a4_full", PageSize::A4, 7.27, 10.69, 1, 1, 0.5, 0.5, 0.0, 0.0, true),
];

/// Names of the built-in presets.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|row| row.0)
}

/// Look up a built-in preset by name (case-insensitive).
pub fn preset(name: &str) -> Option<LabelFormat> {
    let wanted = name.trim();
    PRESETS
        .iter()
        .find(|row| row.0.eq_ignore_ascii_case(wanted))
        .map(|&(id, page, w, h, columns, rows, ml, mt, gx, gy, full_page)| LabelFormat {
            id: id.to_string(),
            page,
            label_width_in: w,
            label_height_in: h,
            columns,
            rows,
            margin_left_in: ml,
            margin_top_in: mt,
            gutter_x_in: gx,
            gutter_y_in: gy,
            full_page,
            labels_per_page: None,
        })
}

/// Look up a preset, falling back to [`DEFAULT_PRESET`] when the name is
/// unknown.
pub fn resolve_preset(name: &str) -> LabelFormat {
    if let Some(format) = preset(name) {
        return format;
    }
    tracing::warn!(
        requested = name,
        fallback = DEFAULT_PRESET,
        "unknown label format preset"
    );
    default_format()
}

/// The [`DEFAULT_PRESET`] format.
pub fn default_format() -> LabelFormat {
    let &(id, page, w, h, columns, rows, ml, mt, gx, gy, full_page) = &PRESETS[0];
    LabelFormat {
        id: id.to_string(),
        page,
        label_width_in: w,
        label_height_in: h,
        columns,
        rows,
        margin_left_in: ml,
        margin_top_in: mt,
        gutter_x_in: gx,
        gutter_y_in: gy,
        full_page,
        labels_per_page: None,
    }
}
