//! Diagnostics for the hazlabel compliance engine.
//!
//! Provides [`Diagnostic`] and [`Severity`], the structured issue types
//! reported by the label validator. Diagnostic ids are defined in the
//! [`codes`] module and documented by [`explain`].

#![warn(missing_docs)]

/// Diagnostic ID constants generated from the catalogue.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic.
///
/// Variants are declared from least to most severe, so `Ord` can be used to
/// compare tiers (`Severity::Error < Severity::Critical`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Informational note; the label was adjusted or is simply annotated.
    Info,
    /// The label may be wrong and should be looked at.
    Warning,
    /// Regulatory-blocking defect; the label is not valid.
    Error,
    /// Safety violation (wrong signal word). Always blocking.
    Critical,
}

impl Severity {
    /// Returns `true` for severities that make a label invalid
    /// (`Error` and above).
    pub fn is_blocking(self) -> bool {
        self >= Severity::Error
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Catalogue id (e.g., `"HZL2001"`).
    pub id: Cow<'static, str>,
    /// What the issue is about: a GHS code (`"H314"`, `"P280"`) or a label
    /// field name (`"signal_word"`, `"sds_date"`).
    pub code: String,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Suggested replacement value, when the fix is mechanical.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable context for tooling. Serialized only when present.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            severity,
            message: message.into(),
            suggestion: None,
            context: None,
        }
    }

    /// Attach a suggested fix (builder pattern).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach machine-readable context metadata (builder pattern).
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the long explanation for this diagnostic's id, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] {}: {}",
            self.severity, self.id, self.code, self.message
        )
    }
}

/// Returns the long explanation for a diagnostic id, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    include!(concat!(env!("OUT_DIR"), "/generated_explain.rs"))
}

/// Returns the catalogue severity for a diagnostic id, if known.
pub fn default_severity(id: &str) -> Option<Severity> {
    include!(concat!(env!("OUT_DIR"), "/generated_severity.rs"))
}
