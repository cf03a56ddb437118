//! Pictogram Resolver.
//!
//! Membership is unioned first, then the registry's suppression rules are
//! applied in order. A rule drops its suppressed pictogram only when every
//! code that implied it is covered by the dominant one.

use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::{Pictogram, Registry};
use std::collections::{BTreeMap, BTreeSet};

use super::diagnostics_util::catalogued;
use crate::statement::Statement;

/// Pictograms mapped to the hazard codes that implied them.
pub type Triggers = BTreeMap<Pictogram, Vec<String>>;

/// Which codes implied which pictogram, before suppression.
///
/// Accepts bare codes, compound codes and full statements
/// (`"H314: Causes ..."`); unknown codes contribute nothing.
pub fn pictogram_triggers<S: AsRef<str>>(hazard_codes: &[S]) -> Triggers {
    let registry = Registry::builtin();
    let mut triggers = Triggers::new();
    for raw in hazard_codes {
        let statement = Statement::parse(raw.as_ref());
        for code in statement.components() {
            for pictogram in registry.pictograms_for(code) {
                let codes = triggers.entry(pictogram).or_default();
                if !codes.iter().any(|c| c == code) {
                    codes.push(code.to_string());
                }
            }
        }
    }
    triggers
}

/// Apply the suppression rules to a trigger map, in place.
///
/// Idempotent: a second application changes nothing.
pub fn apply_suppression(triggers: &mut Triggers) {
    for rule in Registry::builtin().suppression_rules() {
        if !triggers.contains_key(&rule.dominant) {
            continue;
        }
        let Some(codes) = triggers.get(&rule.suppressed) else {
            continue;
        };
        if codes.iter().all(|code| rule.coverage.covers(code)) {
            tracing::trace!(
                dominant = %rule.dominant,
                suppressed = %rule.suppressed,
                "pictogram suppressed"
            );
            triggers.remove(&rule.suppressed);
        }
    }
}

/// The minimal pictogram set for a list of hazard codes, sorted by
/// identifier.
///
/// Pure and deterministic; the same codes in any order give the same result.
pub fn resolve_pictograms<S: AsRef<str>>(hazard_codes: &[S]) -> Vec<Pictogram> {
    let mut triggers = pictogram_triggers(hazard_codes);
    apply_suppression(&mut triggers);
    triggers.into_keys().collect()
}

/// Compare caller-supplied pictogram identifiers with the resolved set.
pub(super) fn check_supplied_pictograms(
    supplied: &[String],
    resolved: &[Pictogram],
    issues: &mut Vec<Diagnostic>,
) {
    let mut valid = BTreeSet::new();
    for raw in supplied {
        match raw.parse::<Pictogram>() {
            Ok(pictogram) => {
                valid.insert(pictogram);
            }
            Err(err) => issues.push(catalogued(
                codes::INVALID_PICTOGRAM,
                raw.trim(),
                err.to_string(),
            )),
        }
    }
    if supplied.is_empty() {
        return;
    }
    let resolved_set: BTreeSet<Pictogram> = resolved.iter().copied().collect();
    if valid != resolved_set {
        let list = |set: &BTreeSet<Pictogram>| {
            set.iter().map(|p| p.id()).collect::<Vec<_>>().join(", ")
        };
        issues.push(
            catalogued(
                codes::PICTOGRAM_CORRECTED,
                "pictograms",
                "supplied pictograms differ from those the hazard codes require",
            )
            .with_suggestion(list(&resolved_set))
            .with_context(ctx!("supplied" => list(&valid))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazlabel_registry::Pictogram::*;

    #[test]
    fn environment_only_for_acute_and_chronic_1_2() {
        assert_eq!(resolve_pictograms(&["H410"]), [Environment]);
        assert!(resolve_pictograms(&["H412"]).is_empty());
    }

    #[test]
    fn skull_always_suppresses_exclamation() {
        assert_eq!(
            resolve_pictograms(&["H301", "H315", "H336"]),
            [SkullAndCrossbones]
        );
    }

    #[test]
    fn corrosion_suppresses_only_skin_eye_irritation() {
        assert_eq!(resolve_pictograms(&["H314", "H315", "H319"]), [Corrosion]);
        assert_eq!(
            resolve_pictograms(&["H314", "H332"]),
            [Corrosion, ExclamationMark]
        );
    }

    #[test]
    fn health_hazard_keeps_exclamation_for_acute_tier() {
        assert_eq!(resolve_pictograms(&["H350", "H317"]), [HealthHazard]);
        assert_eq!(
            resolve_pictograms(&["H350", "H302"]),
            [ExclamationMark, HealthHazard]
        );
    }

    #[test]
    fn accepts_statements_and_compounds() {
        assert_eq!(
            resolve_pictograms(&["H225: Highly flammable liquid and vapor", "H300+H310"]),
            [Flame, SkullAndCrossbones]
        );
    }

    #[test]
    fn suppression_is_idempotent() {
        let mut once = pictogram_triggers(&["H314", "H315", "H350", "H336"]);
        apply_suppression(&mut once);
        let mut twice = once.clone();
        apply_suppression(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn supplied_pictogram_checks() {
        let mut issues = Vec::new();
        let supplied = vec!["GHS05".to_string(), "GHS99".to_string()];
        check_supplied_pictograms(&supplied, &[Corrosion, ExclamationMark], &mut issues);
        let ids: Vec<_> = issues.iter().map(|d| d.id.as_ref()).collect();
        assert_eq!(ids, [codes::INVALID_PICTOGRAM, codes::PICTOGRAM_CORRECTED]);
        assert_eq!(issues[1].suggestion.as_deref(), Some("GHS05, GHS07"));

        issues.clear();
        check_supplied_pictograms(&[], &[Corrosion], &mut issues);
        assert!(issues.is_empty());
    }
}
