//! Supplemental Hazard Injector.

use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::Registry;

use super::diagnostics_util::catalogued;

/// Supplemental statements triggered by phrases in the product name.
///
/// Matching is a case-insensitive substring test per registered phrase.
/// Codes in `existing_codes` (already on the label) and codes triggered by
/// more than one phrase are added once. Returns `"CODE: text"` entries.
pub fn inject_supplemental<S: AsRef<str>>(
    product_identifier: &str,
    existing_codes: &[S],
    issues: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let registry = Registry::builtin();
    let name = product_identifier.to_lowercase();
    let mut added: Vec<&str> = Vec::new();
    let mut out = Vec::new();

    for &(phrase, code) in registry.supplemental_triggers() {
        if !name.contains(phrase)
            || added.contains(&code)
            || existing_codes.iter().any(|c| c.as_ref() == code)
        {
            continue;
        }
        let Some(statement) = registry.lookup_supplemental(code) else {
            continue;
        };
        tracing::debug!(code, phrase, "supplemental statement triggered");
        issues.push(
            catalogued(
                codes::SUPPLEMENTAL_ADDED,
                code,
                format!("{code} added because the product name mentions \"{phrase}\""),
            )
            .with_context(ctx!("phrase" => phrase)),
        );
        added.push(code);
        out.push(format!("{code}: {}", statement.text));
    }
    out
}
