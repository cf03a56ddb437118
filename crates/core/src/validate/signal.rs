//! Signal Word Resolver.

use hazlabel_diagnostics::{Diagnostic, codes};
use hazlabel_registry::Registry;

use super::diagnostics_util::catalogued;
use crate::label::SignalWord;

/// The signal word a set of hazard codes requires: `Danger` if any code is in
/// the critical tier, otherwise `Warning`.
pub fn resolve_signal_word<S: AsRef<str>>(hazard_codes: &[S]) -> SignalWord {
    let registry = Registry::builtin();
    if hazard_codes.iter().any(|c| registry.is_critical(c.as_ref())) {
        SignalWord::Danger
    } else {
        SignalWord::Warning
    }
}

/// Compare a supplied signal word against the derived one.
///
/// Returns `true` when they agree. A word outside Danger/Warning/none is
/// reported and then compared as `None`.
pub(super) fn check_signal_word(
    supplied: &str,
    derived: SignalWord,
    issues: &mut Vec<Diagnostic>,
) -> bool {
    let parsed = SignalWord::parse(supplied).unwrap_or_else(|| {
        issues.push(
            catalogued(
                codes::INVALID_SIGNAL_WORD,
                "signal_word",
                format!("\"{}\" is not a permitted signal word", supplied.trim()),
            )
            .with_suggestion(derived.as_str()),
        );
        SignalWord::None
    });

    if parsed == derived {
        return true;
    }
    tracing::debug!(supplied = %parsed, derived = %derived, "signal word mismatch");
    issues.push(
        catalogued(
            codes::SIGNAL_WORD_MISMATCH,
            "signal_word",
            format!("signal word is {parsed} but the hazard codes require {derived}"),
        )
        .with_suggestion(derived.as_str())
        .with_context(ctx!("supplied" => parsed.as_str(), "required" => derived.as_str())),
    );
    false
}
