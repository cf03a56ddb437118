//! Compliance Orchestrator.
//!
//! [`validate`] runs every check over a [`RawLabel`] and assembles a
//! [`ValidationOutcome`]: the corrected [`Label`] plus an ordered list of
//! severity-tiered diagnostics. Data-quality problems never fail the call;
//! only a label with no product identifier or no hazard statements is
//! rejected.

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
///
/// ```ignore
/// ctx!("hazard" => code, "phrase" => phrase)
/// ```
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        std::collections::BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

mod diagnostics_util;
pub mod pictograms;
pub mod precautions;
pub mod sds_age;
pub mod signal;
pub mod statements;
pub mod supplemental;

use chrono::NaiveDate;
use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::Pictogram;
use serde::Serialize;

use self::diagnostics_util::catalogued;
use self::sds_age::SdsAge;
use self::statements::{StatementKind, derived_hazard_codes, validate_statements};
use crate::label::{Label, LabelError, RawLabel, SignalWord, any_non_blank};

/// Result of validating one label.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationOutcome {
    /// `true` if no issue is `error` or `critical`.
    pub is_valid: bool,
    /// A human should look at the label: it is invalid, or some statement
    /// could not be matched or was rewritten.
    pub needs_review: bool,
    /// The corrected label. Signal word and pictograms are always the derived
    /// ones.
    pub label: Label,
    /// Mandatory precautionary codes missing from the label.
    pub missing_precaution_codes: Vec<String>,
    /// The supplied signal word matched the derived one.
    pub signal_word_valid: bool,
    /// Replacement signal word, when the supplied one was wrong.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_signal_word: Option<SignalWord>,
    /// Pictograms the hazard codes require.
    pub suggested_pictograms: Vec<Pictogram>,
    /// Supplemental statements injected from the product name.
    pub supplemental_hazards: Vec<String>,
    /// Statements kept verbatim because they could not be verified.
    pub unverified_statements: Vec<String>,
    /// SDS age check.
    pub sds_age: SdsAge,
    /// Hazard codes the checks were derived from.
    pub hazard_codes: Vec<String>,
    /// All diagnostics, in pipeline order.
    pub issues: Vec<Diagnostic>,
}

impl ValidationOutcome {
    /// Issues at or above `error`.
    pub fn blocking_issues(&self) -> impl Iterator<Item = &Diagnostic> {
        self.issues.iter().filter(|d| d.severity.is_blocking())
    }
}

/// Validate a label using today's local date for the SDS age check.
pub fn validate(raw: &RawLabel) -> Result<ValidationOutcome, LabelError> {
    validate_at(raw, chrono::Local::now().date_naive())
}

/// Validate a label as of `today`.
///
/// # Errors
///
/// [`LabelError`] when the product identifier is blank or no hazard
/// statement has any text.
pub fn validate_at(raw: &RawLabel, today: NaiveDate) -> Result<ValidationOutcome, LabelError> {
    if raw.product_identifier.trim().is_empty() {
        return Err(LabelError::MissingProductIdentifier);
    }
    if !any_non_blank(&raw.hazard_statements) {
        return Err(LabelError::MissingHazardStatements);
    }
    let product = raw.product_identifier.trim();
    tracing::debug!(product, "validating label");

    let mut issues: Vec<Diagnostic> = Vec::new();

    // ── Statements ──────────────────────────────────────────────────────
    let hazards = validate_statements(&raw.hazard_statements, StatementKind::Hazard, &mut issues);
    let precautionary = validate_statements(
        &raw.precautionary_statements,
        StatementKind::Precautionary,
        &mut issues,
    );
    let hazard_codes = derived_hazard_codes(&hazards);

    // ── Signal word ─────────────────────────────────────────────────────
    let signal_word = signal::resolve_signal_word(&hazard_codes);
    let signal_word_valid = signal::check_signal_word(&raw.signal_word, signal_word, &mut issues);

    // ── Pictograms ──────────────────────────────────────────────────────
    let derived_pictograms = pictograms::resolve_pictograms(&hazard_codes);
    pictograms::check_supplied_pictograms(&raw.pictograms, &derived_pictograms, &mut issues);

    // ── Mandatory precautions ───────────────────────────────────────────
    let missing_precaution_codes = precautions::check_mandatory_precautions(
        &hazard_codes,
        precautionary.components(),
        &mut issues,
    );

    // ── Supplemental statements ─────────────────────────────────────────
    let present: Vec<&str> = hazards.codes().collect();
    let supplemental_hazards = supplemental::inject_supplemental(product, &present, &mut issues);

    // ── SDS age ─────────────────────────────────────────────────────────
    let age = sds_age::check_sds_age(raw.sds_date.as_deref(), today);
    if let Some(warning) = &age.warning {
        issues.push(catalogued(codes::SDS_OUTDATED, "sds_date", warning.clone()));
    }

    let is_valid = !issues.iter().any(|d| d.severity.is_blocking());
    let needs_review = !is_valid || hazards.needs_review || precautionary.needs_review;
    tracing::debug!(
        product,
        is_valid,
        needs_review,
        issues = issues.len(),
        "label validated"
    );

    let mut unverified_statements = hazards.unverified.clone();
    unverified_statements.extend(precautionary.unverified.iter().cloned());

    Ok(ValidationOutcome {
        is_valid,
        needs_review,
        label: Label {
            product_identifier: product.to_string(),
            signal_word,
            hazard_statements: hazards.statements,
            precautionary_statements: precautionary.statements,
            supplemental_statements: supplemental_hazards.clone(),
            pictograms: derived_pictograms.clone(),
            supplier_info: raw.supplier_info.trim().to_string(),
            sds_date: raw.sds_date.clone(),
        },
        missing_precaution_codes,
        signal_word_valid,
        suggested_signal_word: (!signal_word_valid).then_some(signal_word),
        suggested_pictograms: derived_pictograms,
        supplemental_hazards,
        unverified_statements,
        sds_age: age,
        hazard_codes,
        issues,
    })
}
