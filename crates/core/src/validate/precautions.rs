//! Mandatory hazard → precaution pairings.

use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::{COMBINATOR, Registry};
use std::collections::HashSet;

use super::diagnostics_util::catalogued;

/// Mandatory precautionary codes not covered by `precaution_components`.
///
/// A requirement such as `P305+P351+P338` is satisfied when each of its base
/// codes is present. Each missing pairing is reported; the returned codes are
/// deduplicated in first-seen order.
pub fn check_mandatory_precautions<'a>(
    hazard_codes: &[String],
    precaution_components: impl IntoIterator<Item = &'a str>,
    issues: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let registry = Registry::builtin();
    let present: HashSet<&str> = precaution_components.into_iter().collect();
    let mut missing: Vec<String> = Vec::new();

    for hazard in hazard_codes {
        for &required in registry.mandatory_precautions(hazard) {
            if required.split(COMBINATOR).all(|c| present.contains(c)) {
                continue;
            }
            issues.push(
                catalogued(
                    codes::MISSING_MANDATORY_PRECAUTION,
                    required,
                    format!("{hazard} requires precautionary statement {required}"),
                )
                .with_context(ctx!("hazard" => hazard.as_str())),
            );
            if !missing.iter().any(|m| m == required) {
                missing.push(required.to_string());
            }
        }
    }
    missing
}
