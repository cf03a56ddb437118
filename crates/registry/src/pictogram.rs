//! The nine GHS pictograms and their precedence rules.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::RegistryError;

/// A GHS hazard pictogram.
///
/// Variants are declared in `GHS01`..`GHS09` order, so the derived `Ord`
/// matches lexicographic order of the identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pictogram {
    /// GHS01: explosives, self-reactives, organic peroxides.
    #[serde(rename = "GHS01")]
    ExplodingBomb,
    /// GHS02: flammables, pyrophorics, self-heating.
    #[serde(rename = "GHS02")]
    Flame,
    /// GHS03: oxidizers.
    #[serde(rename = "GHS03")]
    FlameOverCircle,
    /// GHS04: gases under pressure.
    #[serde(rename = "GHS04")]
    GasCylinder,
    /// GHS05: skin corrosion, serious eye damage, corrosive to metals.
    #[serde(rename = "GHS05")]
    Corrosion,
    /// GHS06: severe acute toxicity.
    #[serde(rename = "GHS06")]
    SkullAndCrossbones,
    /// GHS07: irritant, harmful, narcotic effects, ozone.
    #[serde(rename = "GHS07")]
    ExclamationMark,
    /// GHS08: carcinogen, mutagen, reproductive and target organ toxicity.
    #[serde(rename = "GHS08")]
    HealthHazard,
    /// GHS09: aquatic toxicity.
    #[serde(rename = "GHS09")]
    Environment,
}

impl Pictogram {
    /// All pictograms in identifier order.
    pub const ALL: [Pictogram; 9] = [
        Pictogram::ExplodingBomb,
        Pictogram::Flame,
        Pictogram::FlameOverCircle,
        Pictogram::GasCylinder,
        Pictogram::Corrosion,
        Pictogram::SkullAndCrossbones,
        Pictogram::ExclamationMark,
        Pictogram::HealthHazard,
        Pictogram::Environment,
    ];

    /// The `GHSnn` identifier.
    pub fn id(self) -> &'static str {
        match self {
            Pictogram::ExplodingBomb => "GHS01",
            Pictogram::Flame => "GHS02",
            Pictogram::FlameOverCircle => "GHS03",
            Pictogram::GasCylinder => "GHS04",
            Pictogram::Corrosion => "GHS05",
            Pictogram::SkullAndCrossbones => "GHS06",
            Pictogram::ExclamationMark => "GHS07",
            Pictogram::HealthHazard => "GHS08",
            Pictogram::Environment => "GHS09",
        }
    }

    /// Human-readable symbol name.
    pub fn name(self) -> &'static str {
        match self {
            Pictogram::ExplodingBomb => "Exploding bomb",
            Pictogram::Flame => "Flame",
            Pictogram::FlameOverCircle => "Flame over circle",
            Pictogram::GasCylinder => "Gas cylinder",
            Pictogram::Corrosion => "Corrosion",
            Pictogram::SkullAndCrossbones => "Skull and crossbones",
            Pictogram::ExclamationMark => "Exclamation mark",
            Pictogram::HealthHazard => "Health hazard",
            Pictogram::Environment => "Environment",
        }
    }
}

impl std::fmt::Display for Pictogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Pictogram {
    type Err = RegistryError;

    /// Parses `GHS01`..`GHS09`, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Pictogram::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RegistryError::UnknownPictogram(s.to_string()))
    }
}

// ── Suppression rules ───────────────────────────────────────────────────

/// Which of the suppressed pictogram's triggering codes a dominant
/// pictogram covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every code.
    All,
    /// Only the listed codes.
    Only(&'static [&'static str]),
    /// Every code except the listed ones.
    AllExcept(&'static [&'static str]),
}

impl Coverage {
    /// Returns `true` if `code` is covered.
    pub fn covers(&self, code: &str) -> bool {
        match self {
            Coverage::All => true,
            Coverage::Only(codes) => codes.contains(&code),
            Coverage::AllExcept(codes) => !codes.contains(&code),
        }
    }
}

/// `dominant` suppresses `suppressed` when every hazard code that implied
/// `suppressed` is covered by `coverage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressionRule {
    /// Pictogram that takes precedence.
    pub dominant: Pictogram,
    /// Pictogram that may be dropped.
    pub suppressed: Pictogram,
    /// Triggering codes the dominant pictogram stands in for.
    pub coverage: Coverage,
}

/// Precedence rules, applied in order.
pub const SUPPRESSION_RULES: &[SuppressionRule] = &[
    // Severe acute toxicity always wins over the exclamation mark.
    SuppressionRule {
        dominant: Pictogram::SkullAndCrossbones,
        suppressed: Pictogram::ExclamationMark,
        coverage: Coverage::All,
    },
    // Corrosion only stands in for skin and eye irritation.
    SuppressionRule {
        dominant: Pictogram::Corrosion,
        suppressed: Pictogram::ExclamationMark,
        coverage: Coverage::Only(&["H315", "H319"]),
    },
    // Health hazard stands in for everything but the harmful/narcotic tier.
    SuppressionRule {
        dominant: Pictogram::HealthHazard,
        suppressed: Pictogram::ExclamationMark,
        coverage: Coverage::AllExcept(&["H302", "H312", "H332", "H336"]),
    },
];
