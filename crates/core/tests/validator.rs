//! Orchestrator tests: end-to-end validation of raw labels.
//!
//! Component-level checks (tokenizer, similarity, individual resolvers) live
//! in the unit tests next to each module.

mod common;

use common::{TODAY, count_diag, diag_ids, find_diag, hazard, precaution, raw_label};
use hazlabel_core::validate::statements::StatementStatus;
use hazlabel_core::{LabelError, Pictogram, RawLabel, Severity, SignalWord, codes, validate_at};

// ─── Signal word ─────────────────────────────────────────────────────────────

#[test]
fn corrosive_labelled_warning_is_a_critical_failure() {
    let raw = RawLabel {
        hazard_statements: vec![
            "H314: Causes severe skin burns and eye damage".into(),
            "H332: Harmful if inhaled".into(),
        ],
        ..raw_label("Drain Opener", "Warning", &[], &["P280", "P305+P351+P338"])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();

    assert!(!outcome.signal_word_valid);
    assert_eq!(outcome.suggested_signal_word, Some(SignalWord::Danger));
    assert_eq!(outcome.label.signal_word, SignalWord::Danger);
    let critical: Vec<_> = outcome
        .issues
        .iter()
        .filter(|d| d.severity == Severity::Critical)
        .collect();
    assert_eq!(critical.len(), 1, "{:?}", outcome.issues);
    assert_eq!(critical[0].id, codes::SIGNAL_WORD_MISMATCH);
    assert!(!outcome.is_valid);
    assert!(outcome.needs_review);
}

#[test]
fn correct_label_is_valid_without_review() {
    let raw = raw_label(
        "Acetone",
        "Danger",
        &["H225", "H319", "H336"],
        &["P210", "P261", "P305+P351+P338"],
    );
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert!(outcome.is_valid, "{:?}", outcome.issues);
    assert!(!outcome.needs_review);
    assert!(outcome.signal_word_valid);
    assert!(outcome.suggested_signal_word.is_none());
    assert_eq!(
        outcome.label.pictograms,
        [Pictogram::Flame, Pictogram::ExclamationMark]
    );
}

#[test]
fn invalid_signal_word_is_an_error() {
    let raw = raw_label("Acetone", "Caution", &["H225"], &["P210"]);
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert_eq!(
        find_diag(&outcome.issues, codes::INVALID_SIGNAL_WORD).severity,
        Severity::Error
    );
    assert!(!outcome.is_valid);
}

// ─── Statements ──────────────────────────────────────────────────────────────

#[test]
fn known_codes_get_canonical_text_and_unknown_are_kept() {
    let raw = RawLabel {
        hazard_statements: vec![
            "H225: Flammable!!".into(),
            "H999: Glows in the dark".into(),
            "Smells bad".into(),
        ],
        ..raw_label("Mystery Solvent", "Danger", &[], &["P210"])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();

    assert_eq!(outcome.label.hazard_statements.len(), 3);
    assert_eq!(outcome.label.hazard_statements[0], hazard("H225"));
    assert_eq!(outcome.label.hazard_statements[1], "H999: Glows in the dark");
    assert_eq!(outcome.label.hazard_statements[2], "Smells bad");
    assert_eq!(
        outcome.unverified_statements,
        ["H999: Glows in the dark", "Smells bad"]
    );
    assert!(outcome.needs_review);
    // Data-quality findings alone do not invalidate the label.
    assert!(outcome.is_valid, "{:?}", outcome.issues);
    assert_eq!(
        diag_ids(&outcome.issues)[..3],
        [
            codes::HAZARD_TEXT_CORRECTED,
            codes::UNKNOWN_HAZARD_CODE,
            codes::UNCODED_STATEMENT
        ]
    );
}

#[test]
fn statement_statuses_reported_per_entry() {
    let mut issues = Vec::new();
    let raw = vec![hazard("H300"), "H300: Poison".to_string(), "H123: ?".to_string()];
    let batch = hazlabel_core::validate::statements::validate_statements(
        &raw,
        hazlabel_core::validate::statements::StatementKind::Hazard,
        &mut issues,
    );
    assert_eq!(
        batch.statuses,
        [
            StatementStatus::Canonical,
            StatementStatus::Corrected,
            StatementStatus::Unverified
        ]
    );
}

// ─── Pictograms ──────────────────────────────────────────────────────────────

#[test]
fn derived_pictograms_override_supplied_ones() {
    let raw = RawLabel {
        pictograms: vec!["GHS09".into(), "GHS42".into()],
        ..raw_label("Acetone", "Danger", &["H225"], &["P210"])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert_eq!(outcome.label.pictograms, [Pictogram::Flame]);
    assert_eq!(outcome.suggested_pictograms, [Pictogram::Flame]);
    assert_eq!(find_diag(&outcome.issues, codes::INVALID_PICTOGRAM).code, "GHS42");
    assert_eq!(
        find_diag(&outcome.issues, codes::PICTOGRAM_CORRECTED)
            .suggestion
            .as_deref(),
        Some("GHS02")
    );
}

#[test]
fn environment_pictogram_only_for_h410() {
    let outcome = validate_at(&raw_label("Pesticide", "Warning", &["H410"], &["P273"]), *TODAY)
        .unwrap();
    assert!(outcome.label.pictograms.contains(&Pictogram::Environment));

    let outcome = validate_at(&raw_label("Detergent", "Warning", &["H412"], &[]), *TODAY)
        .unwrap();
    assert!(outcome.label.pictograms.is_empty());
}

// ─── Mandatory precautions ───────────────────────────────────────────────────

#[test]
fn missing_mandatory_precaution_is_an_error() {
    let raw = raw_label("Drain Opener", "Danger", &["H314"], &["P260"]);
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert_eq!(outcome.missing_precaution_codes, ["P280", "P305+P351+P338"]);
    assert_eq!(count_diag(&outcome.issues, codes::MISSING_MANDATORY_PRECAUTION), 2);
    assert!(!outcome.is_valid);
    assert!(outcome.needs_review);
}

#[test]
fn unregistered_combination_still_supplies_its_components() {
    let raw = RawLabel {
        precautionary_statements: vec![
            precaution("P280"),
            "P305+P338+P351: IF IN EYES: Rinse cautiously".into(),
        ],
        ..raw_label("Drain Opener", "Danger", &["H314"], &[])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert!(outcome.missing_precaution_codes.is_empty());
    assert!(outcome.is_valid, "{:?}", outcome.issues);
    assert!(outcome.needs_review, "unknown combination is flagged");
}

// ─── Supplemental statements ─────────────────────────────────────────────────

#[test]
fn bleach_synonyms_add_one_supplemental_statement() {
    let raw = raw_label(
        "Sodium Hypochlorite Bleach",
        "Danger",
        &["H314"],
        &["P280", "P305+P351+P338"],
    );
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert_eq!(outcome.supplemental_hazards, [hazard("EUH031")]);
    assert_eq!(outcome.label.supplemental_statements, [hazard("EUH031")]);
    assert_eq!(count_diag(&outcome.issues, codes::SUPPLEMENTAL_ADDED), 1);
    assert!(outcome.is_valid);
}

#[test]
fn supplemental_already_listed_is_not_added() {
    let raw = raw_label(
        "Bleach",
        "Danger",
        &["H314", "EUH031"],
        &["P280", "P305+P351+P338"],
    );
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert!(outcome.supplemental_hazards.is_empty());
}

// ─── SDS age ─────────────────────────────────────────────────────────────────

#[test]
fn old_sds_is_flagged_but_not_blocking() {
    let raw = RawLabel {
        sds_date: Some("2015-06-12".into()),
        ..raw_label("Acetone", "Danger", &["H225"], &["P210"])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert!(outcome.sds_age.is_outdated);
    assert!(outcome.sds_age.warning.is_some());
    assert!(outcome.sds_age.years_old.unwrap() > 5.0);
    assert_eq!(
        find_diag(&outcome.issues, codes::SDS_OUTDATED).severity,
        Severity::Warning
    );
    assert!(outcome.is_valid);
}

#[test]
fn garbage_sds_date_is_ignored() {
    let raw = RawLabel {
        sds_date: Some("see attached".into()),
        ..raw_label("Acetone", "Danger", &["H225"], &["P210"])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();
    assert!(!outcome.sds_age.is_outdated);
    assert!(outcome.sds_age.years_old.is_none());
    assert_eq!(count_diag(&outcome.issues, codes::SDS_OUTDATED), 0);
}

// ─── Structural errors ───────────────────────────────────────────────────────

#[test]
fn structural_errors_are_rejected() {
    let raw = raw_label("  ", "Danger", &["H225"], &[]);
    assert_eq!(
        validate_at(&raw, *TODAY).unwrap_err(),
        LabelError::MissingProductIdentifier
    );
    let raw = raw_label("Acetone", "Danger", &[], &[]);
    assert_eq!(
        validate_at(&raw, *TODAY).unwrap_err(),
        LabelError::MissingHazardStatements
    );
}

#[test]
fn blank_hazard_statements_are_structural() {
    let with_hazards = |hazards: &[&str]| RawLabel {
        hazard_statements: hazards.iter().map(|h| h.to_string()).collect(),
        ..raw_label("Acetone", "Danger", &["H225"], &["P210"])
    };
    for blanks in [&[""][..], &["  ", "\t"][..]] {
        assert_eq!(
            validate_at(&with_hazards(blanks), *TODAY).unwrap_err(),
            LabelError::MissingHazardStatements,
            "{blanks:?}"
        );
    }

    // One real statement is enough; the blank one is kept, not dropped.
    let outcome = validate_at(&with_hazards(&["", "H225"]), *TODAY).unwrap();
    assert_eq!(outcome.label.hazard_statements.len(), 2);
}

// ─── Issue ordering and serialization ────────────────────────────────────────

#[test]
fn issues_follow_pipeline_order() {
    let raw = RawLabel {
        pictograms: vec!["GHS01".into()],
        sds_date: Some("2001".into()),
        ..raw_label("Chlorine Tablets", "Warning", &["H314"], &[])
    };
    let outcome = validate_at(&raw, *TODAY).unwrap();
    let ids = diag_ids(&outcome.issues);
    let position = |id: &str| ids.iter().position(|i| i == id).unwrap();
    assert!(position(codes::SIGNAL_WORD_MISMATCH) < position(codes::PICTOGRAM_CORRECTED));
    assert!(position(codes::PICTOGRAM_CORRECTED) < position(codes::MISSING_MANDATORY_PRECAUTION));
    assert!(position(codes::MISSING_MANDATORY_PRECAUTION) < position(codes::SUPPLEMENTAL_ADDED));
    assert!(position(codes::SUPPLEMENTAL_ADDED) < position(codes::SDS_OUTDATED));
}

#[test]
fn outcome_serializes_to_snake_case_json() {
    let outcome = validate_at(&raw_label("Acetone", "Warning", &["H225"], &["P210"]), *TODAY)
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["is_valid"], false);
    assert_eq!(json["suggested_signal_word"], "Danger");
    assert_eq!(json["label"]["signal_word"], "Danger");
    assert_eq!(json["label"]["pictograms"][0], "GHS02");
    assert_eq!(json["issues"][0]["severity"], "critical");
}
