//! GHS code registry.
//!
//! Immutable reference tables for hazard statements (H-codes),
//! precautionary statements (P-codes, including registered combinations),
//! EU supplemental statements (EUH-codes), pictogram membership and
//! precedence, the signal-word severity tier, and mandatory
//! hazard → precaution pairings.
//!
//! The tables are indexed into a [`Registry`] once per process
//! ([`Registry::builtin`]); lookups never fail, they return `None`.

#![warn(missing_docs)]

mod data;
/// Pictogram identifiers and precedence rules.
pub mod pictogram;

pub use pictogram::{Coverage, Pictogram, SUPPRESSION_RULES, SuppressionRule};

use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;

/// Separator between the parts of a combined code (`P303+P361+P353`).
pub const COMBINATOR: char = '+';

/// Errors produced when parsing registry identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Pictogram identifier outside `GHS01`..`GHS09`.
    #[error("unknown pictogram identifier '{0}'")]
    UnknownPictogram(String),
}

// ── Statement records ───────────────────────────────────────────────────

/// A hazard statement (H-code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HazardStatement {
    /// Code identifier, e.g. `"H314"`.
    pub code: &'static str,
    /// Canonical statement text.
    pub text: &'static str,
    /// GHS hazard class.
    pub hazard_class: &'static str,
    /// Category (or categories) within the class.
    pub category: &'static str,
}

/// Section of the label a precautionary statement belongs to, keyed by the
/// first digit of its (first) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecautionGroup {
    /// P1xx.
    General,
    /// P2xx.
    Prevention,
    /// P3xx.
    Response,
    /// P4xx.
    Storage,
    /// P5xx.
    Disposal,
    /// Anything that does not look like a P-code.
    Other,
}

impl PrecautionGroup {
    /// Classify a precautionary code (single or combined) by its first part.
    pub fn of(code: &str) -> Self {
        let mut chars = code.trim_start().chars();
        let is_p = matches!(chars.next(), Some('P' | 'p'));
        match (is_p, chars.next()) {
            (true, Some('1')) => PrecautionGroup::General,
            (true, Some('2')) => PrecautionGroup::Prevention,
            (true, Some('3')) => PrecautionGroup::Response,
            (true, Some('4')) => PrecautionGroup::Storage,
            (true, Some('5')) => PrecautionGroup::Disposal,
            _ => PrecautionGroup::Other,
        }
    }
}

/// A precautionary statement (P-code or registered combination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrecautionStatement {
    /// Code identifier, e.g. `"P280"` or `"P305+P351+P338"`.
    pub code: &'static str,
    /// Canonical statement text.
    pub text: &'static str,
}

impl PrecautionStatement {
    /// The base codes this statement is made of.
    pub fn components(&self) -> impl Iterator<Item = &'static str> {
        self.code.split(COMBINATOR)
    }

    /// Label section of this statement.
    pub fn group(&self) -> PrecautionGroup {
        PrecautionGroup::of(self.code)
    }
}

/// An EU supplemental hazard statement (EUH-code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupplementalStatement {
    /// Code identifier, e.g. `"EUH031"`.
    pub code: &'static str,
    /// Canonical statement text.
    pub text: &'static str,
}

/// Which table a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// H-code.
    Hazard,
    /// P-code.
    Precautionary,
    /// EUH-code.
    Supplemental,
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeKind::Hazard => write!(f, "hazard"),
            CodeKind::Precautionary => write!(f, "precautionary"),
            CodeKind::Supplemental => write!(f, "supplemental"),
        }
    }
}

/// Browse view of a single registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    /// Normalized code identifier.
    pub code: String,
    /// Table the code was found in.
    pub kind: CodeKind,
    /// Canonical statement text.
    pub text: String,
    /// Hazard class (H-codes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_class: Option<String>,
    /// Category (H-codes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Pictograms implied by the code (H-codes only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pictograms: Vec<Pictogram>,
    /// Precautionary codes the hazard mandates (H-codes only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mandatory_precautions: Vec<String>,
}

/// Normalize a user-supplied code: trim, uppercase, and drop whitespace
/// (so `" p305 + p351 "` becomes `"P305+P351"`).
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

// ── Registry ────────────────────────────────────────────────────────────

/// Indexed, immutable view over the reference tables.
#[derive(Debug)]
pub struct Registry {
    hazards: HashMap<&'static str, HazardStatement>,
    precautions: HashMap<&'static str, PrecautionStatement>,
    supplementals: HashMap<&'static str, SupplementalStatement>,
    pictograms: HashMap<&'static str, BTreeSet<Pictogram>>,
    critical: HashSet<&'static str>,
    mandatory: HashMap<&'static str, &'static [&'static str]>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Index the built-in tables.
    ///
    /// Prefer [`Registry::builtin`], which does this once per process.
    pub fn new() -> Self {
        let hazards = data::HAZARD_STATEMENTS
            .iter()
            .map(|&(code, text, hazard_class, category)| {
                (
                    code,
                    HazardStatement {
                        code,
                        text,
                        hazard_class,
                        category,
                    },
                )
            })
            .collect();
        let precautions = data::PRECAUTIONARY_STATEMENTS
            .iter()
            .map(|&(code, text)| (code, PrecautionStatement { code, text }))
            .collect();
        let supplementals = data::SUPPLEMENTAL_STATEMENTS
            .iter()
            .map(|&(code, text)| (code, SupplementalStatement { code, text }))
            .collect();

        let mut pictograms: HashMap<&'static str, BTreeSet<Pictogram>> = HashMap::new();
        for &(pictogram, codes) in data::PICTOGRAM_MEMBERSHIP {
            for &code in codes {
                pictograms.entry(code).or_default().insert(pictogram);
            }
        }

        Self {
            hazards,
            precautions,
            supplementals,
            pictograms,
            critical: data::CRITICAL_HAZARD_CODES.iter().copied().collect(),
            mandatory: data::MANDATORY_PRECAUTIONS.iter().copied().collect(),
        }
    }

    /// The process-wide registry, built on first access.
    pub fn builtin() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Exact lookup of a hazard statement.
    pub fn lookup_hazard(&self, code: &str) -> Option<&HazardStatement> {
        self.hazards.get(code)
    }

    /// Exact lookup of a precautionary statement. Combined codes must match a
    /// registered combination.
    pub fn lookup_precaution(&self, code: &str) -> Option<&PrecautionStatement> {
        self.precautions.get(code)
    }

    /// Exact lookup of a supplemental statement.
    pub fn lookup_supplemental(&self, code: &str) -> Option<&SupplementalStatement> {
        self.supplementals.get(code)
    }

    /// Normalizing lookup across all three tables.
    pub fn lookup_code(&self, code: &str) -> Option<CodeInfo> {
        let code = normalize_code(code);
        if let Some(h) = self.lookup_hazard(&code) {
            return Some(CodeInfo {
                code,
                kind: CodeKind::Hazard,
                text: h.text.to_string(),
                hazard_class: Some(h.hazard_class.to_string()),
                category: Some(h.category.to_string()),
                pictograms: self.pictograms_for(h.code).into_iter().collect(),
                mandatory_precautions: self
                    .mandatory_precautions(h.code)
                    .iter()
                    .map(|p| (*p).to_string())
                    .collect(),
            });
        }
        let (kind, text) = if let Some(p) = self.lookup_precaution(&code) {
            (CodeKind::Precautionary, p.text)
        } else if let Some(s) = self.lookup_supplemental(&code) {
            (CodeKind::Supplemental, s.text)
        } else {
            return None;
        };
        Some(CodeInfo {
            code,
            kind,
            text: text.to_string(),
            hazard_class: None,
            category: None,
            pictograms: Vec::new(),
            mandatory_precautions: Vec::new(),
        })
    }

    /// All hazard statements, sorted by code.
    pub fn all_hazard_codes(&self) -> Vec<&HazardStatement> {
        let mut all: Vec<_> = self.hazards.values().collect();
        all.sort_unstable_by_key(|h| h.code);
        all
    }

    /// All precautionary statements, sorted by code.
    pub fn all_precaution_codes(&self) -> Vec<&PrecautionStatement> {
        let mut all: Vec<_> = self.precautions.values().collect();
        all.sort_unstable_by_key(|p| p.code);
        all
    }

    /// All supplemental statements, sorted by code.
    pub fn all_supplemental_codes(&self) -> Vec<&SupplementalStatement> {
        let mut all: Vec<_> = self.supplementals.values().collect();
        all.sort_unstable_by_key(|s| s.code);
        all
    }

    /// Pictograms implied by a single hazard code. Empty when the code implies
    /// none or is unknown.
    pub fn pictograms_for(&self, code: &str) -> BTreeSet<Pictogram> {
        self.pictograms.get(code).cloned().unwrap_or_default()
    }

    /// Whether a hazard code belongs to the `Danger` tier.
    pub fn is_critical(&self, code: &str) -> bool {
        self.critical.contains(code)
    }

    /// The `Danger`-tier hazard codes, sorted.
    pub fn critical_codes(&self) -> Vec<&'static str> {
        let mut all: Vec<_> = self.critical.iter().copied().collect();
        all.sort_unstable();
        all
    }

    /// Precautionary codes mandated by a hazard code (possibly empty).
    pub fn mandatory_precautions(&self, code: &str) -> &'static [&'static str] {
        self.mandatory.get(code).copied().unwrap_or(&[])
    }

    /// `(lowercase phrase, supplemental code)` trigger pairs, in declaration
    /// order.
    pub fn supplemental_triggers(&self) -> &'static [(&'static str, &'static str)] {
        data::SUPPLEMENTAL_TRIGGERS
    }

    /// Pictogram precedence rules, in application order.
    pub fn suppression_rules(&self) -> &'static [SuppressionRule] {
        SUPPRESSION_RULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> &'static Registry {
        Registry::builtin()
    }

    // ── Lookups ─────────────────────────────────────────────────────────

    #[test]
    fn lookup_hazard_exact() {
        let h = reg().lookup_hazard("H314").unwrap();
        assert_eq!(h.text, "Causes severe skin burns and eye damage");
        assert_eq!(h.hazard_class, "Skin corrosion/irritation");
        assert!(reg().lookup_hazard("h314").is_none(), "lookup is exact");
        assert!(reg().lookup_hazard("H999").is_none());
    }

    #[test]
    fn lookup_precaution_compound() {
        let p = reg().lookup_precaution("P303+P361+P353").unwrap();
        assert_eq!(
            p.text,
            "IF ON SKIN (or hair): Remove/Take off immediately all contaminated clothing. Rinse skin with water/shower."
        );
        assert_eq!(
            p.components().collect::<Vec<_>>(),
            vec!["P303", "P361", "P353"]
        );
        assert_eq!(p.group(), PrecautionGroup::Response);
        assert!(reg().lookup_precaution("P353+P361+P303").is_none());
    }

    #[test]
    fn lookup_supplemental_exact() {
        let s = reg().lookup_supplemental("EUH031").unwrap();
        assert_eq!(s.text, "Contact with acids liberates toxic gas.");
    }

    #[test]
    fn lookup_code_normalizes_and_classifies() {
        let info = reg().lookup_code("  h410 ").unwrap();
        assert_eq!(info.code, "H410");
        assert_eq!(info.kind, CodeKind::Hazard);
        assert_eq!(info.pictograms, vec![Pictogram::Environment]);
        assert_eq!(info.mandatory_precautions, vec!["P273".to_string()]);

        let info = reg().lookup_code("p305 + p351 + p338").unwrap();
        assert_eq!(info.kind, CodeKind::Precautionary);
        assert!(info.hazard_class.is_none());

        let info = reg().lookup_code("euh031").unwrap();
        assert_eq!(info.kind, CodeKind::Supplemental);

        assert!(reg().lookup_code("X123").is_none());
    }

    #[test]
    fn lists_are_sorted_and_complete() {
        let h = reg().all_hazard_codes();
        assert_eq!(h.len(), data::HAZARD_STATEMENTS.len());
        assert!(h.windows(2).all(|w| w[0].code < w[1].code));
        let p = reg().all_precaution_codes();
        assert_eq!(p.len(), data::PRECAUTIONARY_STATEMENTS.len());
        assert!(p.windows(2).all(|w| w[0].code < w[1].code));
        let s = reg().all_supplemental_codes();
        assert!(s.windows(2).all(|w| w[0].code < w[1].code));
    }

    #[test]
    fn tables_have_no_duplicate_codes() {
        assert_eq!(reg().hazards.len(), data::HAZARD_STATEMENTS.len());
        assert_eq!(reg().precautions.len(), data::PRECAUTIONARY_STATEMENTS.len());
        assert_eq!(
            reg().supplementals.len(),
            data::SUPPLEMENTAL_STATEMENTS.len()
        );
    }

    // ── Pictograms ──────────────────────────────────────────────────────

    #[test]
    fn pictograms_for_membership() {
        assert_eq!(
            reg().pictograms_for("H241"),
            BTreeSet::from([Pictogram::ExplodingBomb, Pictogram::Flame])
        );
        assert!(reg().pictograms_for("H412").is_empty());
        assert!(reg().pictograms_for("H227").is_empty());
        assert!(reg().pictograms_for("P280").is_empty());
    }

    // ── Cross-table integrity ───────────────────────────────────────────

    #[test]
    fn membership_codes_exist() {
        for (pictogram, codes) in data::PICTOGRAM_MEMBERSHIP {
            for code in *codes {
                assert!(
                    reg().lookup_hazard(code).is_some(),
                    "{pictogram} lists unknown hazard code {code}"
                );
            }
        }
    }

    #[test]
    fn critical_codes_exist() {
        for code in reg().critical_codes() {
            assert!(reg().lookup_hazard(code).is_some(), "unknown critical {code}");
        }
        assert!(reg().is_critical("H314"));
        assert!(!reg().is_critical("H332"));
    }

    #[test]
    fn mandatory_pairings_reference_known_codes() {
        for (hazard, required) in data::MANDATORY_PRECAUTIONS {
            assert!(reg().lookup_hazard(hazard).is_some(), "unknown {hazard}");
            for p in *required {
                assert!(
                    reg().lookup_precaution(p).is_some(),
                    "{hazard} requires unregistered {p}"
                );
            }
        }
    }

    #[test]
    fn triggers_reference_known_supplementals() {
        for (phrase, code) in reg().supplemental_triggers() {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrases are lowercase");
            assert!(reg().lookup_supplemental(code).is_some(), "unknown {code}");
        }
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(Registry::builtin(), Registry::builtin()));
    }

    #[test]
    fn normalize_code_strips_whitespace() {
        assert_eq!(normalize_code(" p305 + p351 "), "P305+P351");
        assert_eq!(normalize_code("euh031"), "EUH031");
    }

    #[test]
    fn precaution_group_classification() {
        assert_eq!(PrecautionGroup::of("P101"), PrecautionGroup::General);
        assert_eq!(PrecautionGroup::of("P280"), PrecautionGroup::Prevention);
        assert_eq!(PrecautionGroup::of("P410+P403"), PrecautionGroup::Storage);
        assert_eq!(PrecautionGroup::of("P501"), PrecautionGroup::Disposal);
        assert_eq!(PrecautionGroup::of("Keep cool"), PrecautionGroup::Other);
    }
}
