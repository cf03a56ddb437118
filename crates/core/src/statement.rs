//! Statement tokenizer: `"CODE: free text"` → structured `(code, text)`.

use hazlabel_registry::{COMBINATOR, normalize_code};
use regex::Regex;
use std::sync::LazyLock;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(EUH|H|P)\d{3}(\+(EUH|H|P)\d{3})*$").expect("Invalid statement code regex")
});

/// Returns `true` if `code` (already normalized) looks like a GHS code or a
/// `+`-joined combination of them.
pub fn is_code(code: &str) -> bool {
    CODE_RE.is_match(code)
}

/// One label statement, split into its code prefix and free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Normalized code prefix, if the statement carried one.
    pub code: Option<String>,
    /// Free text after the code (or the whole string when uncoded), trimmed.
    pub text: String,
}

impl Statement {
    /// Tokenize a raw statement.
    ///
    /// The string is split on its first `:`. The prefix counts as a code only
    /// if it normalizes to something [`is_code`] accepts; otherwise the whole
    /// input is treated as bare text. A lone code with no colon (`"H225"`) is
    /// a code with empty text.
    pub fn parse(raw: &str) -> Statement {
        let trimmed = raw.trim();
        if let Some((prefix, rest)) = trimmed.split_once(':') {
            let code = normalize_code(prefix);
            if is_code(&code) {
                return Statement {
                    code: Some(code),
                    text: rest.trim().to_string(),
                };
            }
        } else {
            let code = normalize_code(trimmed);
            if is_code(&code) {
                return Statement {
                    code: Some(code),
                    text: String::new(),
                };
            }
        }
        Statement {
            code: None,
            text: trimmed.to_string(),
        }
    }

    /// Base codes of a compound code; empty for uncoded statements.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.code
            .as_deref()
            .into_iter()
            .flat_map(|code| code.split(COMBINATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon() {
        let s = Statement::parse("H314: Causes severe skin burns: and eye damage");
        assert_eq!(s.code.as_deref(), Some("H314"));
        assert_eq!(s.text, "Causes severe skin burns: and eye damage");
    }

    #[test]
    fn normalizes_compound_prefix() {
        let s = Statement::parse(" p305 + p351 + p338 : IF IN EYES");
        assert_eq!(s.code.as_deref(), Some("P305+P351+P338"));
        assert_eq!(s.components().collect::<Vec<_>>(), ["P305", "P351", "P338"]);
    }

    #[test]
    fn bare_code_without_text() {
        let s = Statement::parse("euh031");
        assert_eq!(s.code.as_deref(), Some("EUH031"));
        assert!(s.text.is_empty());
    }

    #[test]
    fn non_code_prefix_is_bare_text() {
        let s = Statement::parse("Note: keep away from children");
        assert!(s.code.is_none());
        assert_eq!(s.text, "Note: keep away from children");
        assert_eq!(s.components().count(), 0);

        let s = Statement::parse("H31: truncated code");
        assert!(s.code.is_none());
    }

    #[test]
    fn is_code_accepts_mixed_families() {
        assert!(is_code("H300+H310"));
        assert!(is_code("EUH208"));
        assert!(!is_code("H300+"));
        assert!(!is_code("X100"));
    }
}
