//! Shared test helpers for `hazlabel_core` integration tests.

#![allow(unreachable_pub)]

use chrono::NaiveDate;
use hazlabel_core::{Diagnostic, Label, RawLabel, SignalWord};
use hazlabel_registry::{Pictogram, Registry};
use std::sync::LazyLock;

/// Fixed validation date so SDS age checks are reproducible.
pub static TODAY: LazyLock<NaiveDate> =
    LazyLock::new(|| NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date"));

// ─── Label builders ──────────────────────────────────────────────────────────

/// `"CODE: canonical text"` for a hazard or supplemental code.
#[allow(dead_code)]
pub fn hazard(code: &str) -> String {
    let reg = Registry::builtin();
    let text = reg
        .lookup_hazard(code)
        .map(|h| h.text)
        .or_else(|| reg.lookup_supplemental(code).map(|s| s.text))
        .unwrap_or_else(|| panic!("unknown hazard code {code}"));
    format!("{code}: {text}")
}

/// `"CODE: canonical text"` for a precautionary code.
#[allow(dead_code)]
pub fn precaution(code: &str) -> String {
    let text = Registry::builtin()
        .lookup_precaution(code)
        .unwrap_or_else(|| panic!("unknown precaution code {code}"))
        .text;
    format!("{code}: {text}")
}

/// A raw label with canonical statements for the given codes.
#[allow(dead_code)]
pub fn raw_label(product: &str, signal: &str, hazards: &[&str], precautions: &[&str]) -> RawLabel {
    RawLabel {
        product_identifier: product.to_string(),
        signal_word: signal.to_string(),
        hazard_statements: hazards.iter().map(|c| hazard(c)).collect(),
        precautionary_statements: precautions.iter().map(|c| precaution(c)).collect(),
        pictograms: Vec::new(),
        supplier_info: "Acme Chemical Co., 1 Main St, Springfield, (555) 010-0000".to_string(),
        sds_date: None,
    }
}

/// A corrected label ready for layout.
#[allow(dead_code)]
pub fn label(product: &str, hazards: &[&str], precautions: &[&str]) -> Label {
    Label {
        product_identifier: product.to_string(),
        signal_word: SignalWord::Danger,
        hazard_statements: hazards.iter().map(|c| hazard(c)).collect(),
        precautionary_statements: precautions.iter().map(|c| precaution(c)).collect(),
        supplemental_statements: Vec::new(),
        pictograms: vec![Pictogram::Corrosion, Pictogram::ExclamationMark],
        supplier_info: "Acme Chemical Co., 1 Main St, Springfield, (555) 010-0000".to_string(),
        sds_date: None,
    }
}

// ─── Diagnostic helpers ──────────────────────────────────────────────────────

/// Find the first diagnostic with the given id, panicking if none.
#[allow(dead_code)]
pub fn find_diag<'a>(issues: &'a [Diagnostic], id: &str) -> &'a Diagnostic {
    issues
        .iter()
        .find(|d| &*d.id == id)
        .unwrap_or_else(|| panic!("expected diagnostic {id}, got {issues:?}"))
}

/// Number of diagnostics with the given id.
#[allow(dead_code)]
pub fn count_diag(issues: &[Diagnostic], id: &str) -> usize {
    issues.iter().filter(|d| &*d.id == id).count()
}

/// Ids of all diagnostics, in order.
#[allow(dead_code)]
pub fn diag_ids(issues: &[Diagnostic]) -> Vec<String> {
    issues.iter().map(|d| d.id.to_string()).collect()
}
