//! Render plan: positioned drawing instructions for one label.
//!
//! Coordinates are PDF points with the origin at the bottom-left of the
//! page. Text `y` values are baselines.

use hazlabel_registry::Pictogram;
use serde::Serialize;

use super::measure::Font;

/// An RGB fill colour, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };
    /// Caption and footer grey.
    pub const GREY: Rgb = Rgb { r: 0.4, g: 0.4, b: 0.4 };
    /// `DANGER`.
    pub const RED: Rgb = Rgb { r: 1.0, g: 0.0, b: 0.0 };
    /// `WARNING`.
    pub const ORANGE: Rgb = Rgb { r: 0.9, g: 0.5, b: 0.0 };
}

/// What a text run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// "Product Identifier:" caption.
    ProductCaption,
    /// Product name.
    ProductName,
    /// Signal word.
    SignalWord,
    /// Bullet and code of a hazard statement.
    HazardCode,
    /// Hazard statement description line.
    HazardText,
    /// Code of a precautionary statement.
    PrecautionCode,
    /// Precautionary statement description line.
    PrecautionText,
    /// Supplier footer.
    Supplier,
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Label outline.
    Border {
        /// Left edge.
        x: f64,
        /// Bottom edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// A single-line text run.
    Text {
        /// Left edge.
        x: f64,
        /// Baseline.
        y: f64,
        /// Font face.
        font: Font,
        /// Font size in points.
        size: f64,
        /// Fill colour.
        color: Rgb,
        /// The text.
        text: String,
        /// What the text is.
        role: TextRole,
    },
    /// A pictogram drawn as a square rotated about its centre.
    Pictogram {
        /// Centre x.
        center_x: f64,
        /// Centre y.
        center_y: f64,
        /// Side length of the unrotated square.
        size: f64,
        /// Rotation in degrees, counter-clockwise.
        rotation_deg: f64,
        /// Which symbol.
        pictogram: Pictogram,
    },
}

/// Layout of one label instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    /// Position of the label in the input sequence.
    pub source_index: usize,
    /// Zero-based output page.
    pub page: usize,
    /// Cell index within the page.
    pub slot: usize,
    /// Grid column.
    pub column: u32,
    /// Grid row, from the top.
    pub row: u32,
    /// A new page starts with this label.
    pub page_break_before: bool,
    /// Left edge of the label.
    pub x: f64,
    /// Bottom edge of the label.
    pub y: f64,
    /// Label width.
    pub width: f64,
    /// Label height.
    pub height: f64,
    /// Uniform scale applied to fonts and spacing.
    pub scale: f64,
    /// Drawing instructions, in paint order.
    pub ops: Vec<DrawOp>,
    /// Hazard statements that did not fit.
    pub omitted_hazards: Vec<String>,
    /// Precautionary statements that did not fit.
    pub omitted_precautions: Vec<String>,
    /// Header lines that did not fit above the footer.
    pub omitted_header: Vec<TextRole>,
}

impl RenderPlan {
    /// Text runs with the given role, in paint order.
    pub fn texts(&self, role: TextRole) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Text { role: r, text, .. } if *r == role => Some(text.as_str()),
            _ => None,
        })
    }

    /// Pictograms placed on the label, in paint order.
    pub fn pictograms(&self) -> impl Iterator<Item = Pictogram> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Pictogram { pictogram, .. } => Some(*pictogram),
            _ => None,
        })
    }

    /// Whether anything had to be left off.
    pub fn is_truncated(&self) -> bool {
        !self.omitted_hazards.is_empty()
            || !self.omitted_precautions.is_empty()
            || !self.omitted_header.is_empty()
    }
}
