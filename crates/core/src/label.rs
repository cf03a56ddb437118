//! Label records: the raw extraction input and the corrected label.

use hazlabel_registry::Pictogram;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The mandatory severity word printed under the product identifier.
///
/// Ordered by severity: `None < Warning < Danger`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SignalWord {
    /// No signal word.
    #[default]
    None,
    /// Moderate tier.
    Warning,
    /// Severe tier.
    Danger,
}

impl SignalWord {
    /// Parse a supplied signal word, case-insensitive.
    ///
    /// Empty text and `"none"` mean [`SignalWord::None`]. Returns `None` for
    /// anything that is not a permitted signal word.
    pub fn parse(raw: &str) -> Option<SignalWord> {
        let word = raw.trim();
        if word.is_empty() || word.eq_ignore_ascii_case("none") {
            Some(SignalWord::None)
        } else if word.eq_ignore_ascii_case("danger") {
            Some(SignalWord::Danger)
        } else if word.eq_ignore_ascii_case("warning") {
            Some(SignalWord::Warning)
        } else {
            None
        }
    }

    /// Display form (`"Danger"`, `"Warning"`, `"None"`).
    pub fn as_str(self) -> &'static str {
        match self {
            SignalWord::None => "None",
            SignalWord::Warning => "Warning",
            SignalWord::Danger => "Danger",
        }
    }
}

impl std::fmt::Display for SignalWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label fields as supplied by the extraction step. Nothing here is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLabel {
    /// Product name.
    pub product_identifier: String,
    /// Signal word text, unparsed.
    pub signal_word: String,
    /// `"CODE: text"` hazard statements, or bare text.
    pub hazard_statements: Vec<String>,
    /// `"CODE: text"` precautionary statements, or bare text.
    pub precautionary_statements: Vec<String>,
    /// Pictogram identifiers, unparsed.
    pub pictograms: Vec<String>,
    /// Supplier name, address and phone.
    pub supplier_info: String,
    /// SDS issue or revision date, any common format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sds_date: Option<String>,
}

/// A corrected label, ready for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    /// Product name.
    pub product_identifier: String,
    /// Derived signal word.
    pub signal_word: SignalWord,
    /// Validated hazard statements, in input order.
    pub hazard_statements: Vec<String>,
    /// Validated precautionary statements, in input order.
    pub precautionary_statements: Vec<String>,
    /// Injected supplemental (EUH) statements.
    pub supplemental_statements: Vec<String>,
    /// Derived pictograms, sorted.
    pub pictograms: Vec<Pictogram>,
    /// Supplier name, address and phone.
    pub supplier_info: String,
    /// SDS issue or revision date, as supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sds_date: Option<String>,
}

impl Label {
    /// A label can be rendered when it names a product and carries at least
    /// one non-blank hazard statement.
    pub fn is_renderable(&self) -> bool {
        !self.product_identifier.trim().is_empty() && any_non_blank(&self.hazard_statements)
    }
}

pub(crate) fn any_non_blank(statements: &[String]) -> bool {
    statements.iter().any(|s| !s.trim().is_empty())
}

/// Input so incomplete that no label can be produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelError {
    /// The product identifier is empty.
    #[error("label has no product identifier")]
    MissingProductIdentifier,
    /// There are no hazard statements, or every one is blank.
    #[error("label has no hazard statements")]
    MissingHazardStatements,
}
