//! Text measurement.

use serde::{Deserialize, Serialize};

/// Font face used by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

/// Measures rendered text width in points.
///
/// The layout engine only needs widths: wrapping, truncation and
/// code/description alignment all derive from them.
pub trait TextMeasurer: Send + Sync {
    /// Width of `text` set in `font` at `size` points.
    fn text_width(&self, text: &str, font: Font, size: f64) -> f64;
}

/// Standard Helvetica advance widths (1/1000 em) for printable ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

/// Width used for characters outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

// Index = byte - 0x20.
#[rustfmt::skip]
const REGULAR: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

impl TextMeasurer for HelveticaMetrics {
    fn text_width(&self, text: &str, font: Font, size: f64) -> f64 {
        let table = match font {
            Font::Regular => &REGULAR,
            Font::Bold => &BOLD,
        };
        let units: u32 = text
            .chars()
            .map(|c| {
                let idx = (c as u32).wrapping_sub(0x20) as usize;
                u32::from(table.get(idx).copied().unwrap_or(FALLBACK_WIDTH))
            })
            .sum();
        f64::from(units) * size / 1000.0
    }
}
