//! Statement Validator: reconcile supplied statements with the registry.

use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::Registry;
use serde::Serialize;

use super::diagnostics_util::catalogued;
use crate::similarity::ratio;
use crate::statement::Statement;

/// Supplied text below this similarity to the canonical text flags review.
pub const SIMILARITY_THRESHOLD: f64 = 0.9;

/// Which statement list is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Hazard statements; H- and EUH-codes are accepted.
    Hazard,
    /// Precautionary statements; exact P-codes and registered combinations.
    Precautionary,
}

impl StatementKind {
    fn field(self) -> &'static str {
        match self {
            StatementKind::Hazard => "hazard_statements",
            StatementKind::Precautionary => "precautionary_statements",
        }
    }

    fn canonical_text(self, registry: &Registry, code: &str) -> Option<&'static str> {
        match self {
            StatementKind::Hazard => registry
                .lookup_hazard(code)
                .map(|h| h.text)
                .or_else(|| registry.lookup_supplemental(code).map(|s| s.text)),
            StatementKind::Precautionary => registry.lookup_precaution(code).map(|p| p.text),
        }
    }
}

/// What happened to a single statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    /// Known code; supplied text matched closely and was normalized.
    Canonical,
    /// Known code; supplied text diverged and was replaced.
    Corrected,
    /// Unknown or missing code; supplied text kept verbatim.
    Unverified,
}

/// Result of validating one list of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementBatch {
    /// Corrected statements, one per input, in input order.
    pub statements: Vec<String>,
    /// Status of each entry in `statements`.
    pub statuses: Vec<StatementStatus>,
    /// Parsed form of each entry, for downstream code extraction.
    #[serde(skip)]
    pub parsed: Vec<Statement>,
    /// Some statement needs a human to look at it.
    pub needs_review: bool,
    /// Statements that could not be matched to the registry.
    pub unverified: Vec<String>,
}

impl StatementBatch {
    /// Codes of every coded statement, in order (compounds not split).
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.parsed.iter().filter_map(|s| s.code.as_deref())
    }

    /// Base codes of every coded statement, in order, with duplicates.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.parsed.iter().flat_map(Statement::components)
    }
}

/// Validate a list of raw statements against the registry.
///
/// Known codes get their canonical text regardless of similarity; the
/// similarity only decides whether the batch is flagged for review. Unknown
/// and uncoded statements are kept as supplied. Nothing is dropped.
pub fn validate_statements(
    raw: &[String],
    kind: StatementKind,
    issues: &mut Vec<Diagnostic>,
) -> StatementBatch {
    let registry = Registry::builtin();
    let mut batch = StatementBatch::default();

    for (index, entry) in raw.iter().enumerate() {
        let statement = Statement::parse(entry);
        let (text, status) = match statement.code.as_deref() {
            Some(code) => match kind.canonical_text(registry, code) {
                Some(canonical) => {
                    let similarity = ratio(&statement.text, canonical);
                    let status = if similarity < SIMILARITY_THRESHOLD {
                        tracing::debug!(code, similarity, "statement text replaced");
                        issues.push(text_corrected(kind, code, &statement.text, canonical, similarity));
                        StatementStatus::Corrected
                    } else {
                        StatementStatus::Canonical
                    };
                    (format!("{code}: {canonical}"), status)
                }
                None => {
                    tracing::debug!(code, "statement code not in registry");
                    issues.push(unknown_code(kind, code, index));
                    (entry.trim().to_string(), StatementStatus::Unverified)
                }
            },
            None => {
                issues.push(uncoded(kind, entry, index));
                (entry.trim().to_string(), StatementStatus::Unverified)
            }
        };

        if status != StatementStatus::Canonical {
            batch.needs_review = true;
        }
        if status == StatementStatus::Unverified {
            batch.unverified.push(text.clone());
        }
        batch.statements.push(text);
        batch.statuses.push(status);
        batch.parsed.push(statement);
    }
    batch
}

fn text_corrected(
    kind: StatementKind,
    code: &str,
    supplied: &str,
    canonical: &str,
    similarity: f64,
) -> Diagnostic {
    let id = match kind {
        StatementKind::Hazard => codes::HAZARD_TEXT_CORRECTED,
        StatementKind::Precautionary => codes::PRECAUTION_TEXT_CORRECTED,
    };
    catalogued(
        id,
        code,
        format!("{code}: supplied text differs from the registry and was replaced"),
    )
    .with_suggestion(canonical)
    .with_context(ctx!(
        "supplied" => supplied,
        "similarity" => format!("{similarity:.2}"),
    ))
}

fn unknown_code(kind: StatementKind, code: &str, index: usize) -> Diagnostic {
    let (id, label) = match kind {
        StatementKind::Hazard => (codes::UNKNOWN_HAZARD_CODE, "hazard"),
        StatementKind::Precautionary => (codes::UNKNOWN_PRECAUTION_CODE, "precautionary"),
    };
    catalogued(
        id,
        code,
        format!("{code} is not a known {label} code; statement kept as supplied"),
    )
    .with_context(ctx!("field" => kind.field(), "index" => index.to_string()))
}

fn uncoded(kind: StatementKind, entry: &str, index: usize) -> Diagnostic {
    let field = format!("{}[{index}]", kind.field());
    catalogued(
        codes::UNCODED_STATEMENT,
        field,
        format!("statement has no code prefix: \"{}\"", entry.trim()),
    )
    .with_context(ctx!("field" => kind.field(), "index" => index.to_string()))
}

/// Hazard codes implied by a validated hazard batch: base codes of every
/// coded statement that exist in the hazard table, deduplicated, in
/// first-seen order.
pub fn derived_hazard_codes(batch: &StatementBatch) -> Vec<String> {
    let registry = Registry::builtin();
    let mut out: Vec<String> = Vec::new();
    for code in batch.components() {
        if registry.lookup_hazard(code).is_some() && !out.iter().any(|c| c == code) {
            out.push(code.to_string());
        }
    }
    out
}
