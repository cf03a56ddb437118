//! hazlabel core library.
//!
//! Validates and corrects GHS hazard-label data extracted from Safety Data
//! Sheets, and lays corrected labels out on physical label sheets. The main
//! entry points are [`validate`] for compliance checking, [`resolve_pictograms`]
//! for pictogram derivation, and [`render`] for layout.
//!
//! Every check is a pure function over immutable inputs and the process-wide
//! [`Registry`](hazlabel_registry::Registry); labels may be validated and
//! rendered concurrently.

#![warn(missing_docs)]

/// Raw and corrected label records.
pub mod label;
/// Label layout: grid placement, scaling, wrapping and truncation.
pub mod layout;
/// Text similarity used to judge supplied statement text.
pub mod similarity;
/// `"CODE: text"` statement tokenizer.
pub mod statement;
/// Compliance checks and the orchestrator that combines them.
pub mod validate;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Label records
pub use label::{Label, LabelError, RawLabel, SignalWord};

// Validator
pub use validate::pictograms::resolve_pictograms;
pub use validate::sds_age::{SdsAge, check_sds_age};
pub use validate::signal::resolve_signal_word;
pub use validate::{ValidationOutcome, validate, validate_at};

// Layout
pub use layout::measure::{Font, HelveticaMetrics, TextMeasurer};
pub use layout::plan::{DrawOp, RenderPlan, Rgb, TextRole};
pub use layout::{render, render_with};

// Diagnostics (re-exported from the diagnostics crate)
pub use hazlabel_diagnostics::{Diagnostic, Severity, codes};

// Registry accessors
pub use hazlabel_registry::{CodeInfo, Pictogram, Registry};

/// Normalizing registry lookup across hazard, precautionary and supplemental
/// codes.
pub fn lookup_code(code: &str) -> Option<CodeInfo> {
    Registry::builtin().lookup_code(code)
}

/// Every hazard statement, sorted by code.
pub fn list_hazard_codes() -> Vec<&'static hazlabel_registry::HazardStatement> {
    Registry::builtin().all_hazard_codes()
}

/// Every precautionary statement, sorted by code.
pub fn list_precaution_codes() -> Vec<&'static hazlabel_registry::PrecautionStatement> {
    Registry::builtin().all_precaution_codes()
}
