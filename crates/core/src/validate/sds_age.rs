//! SDS Age Checker.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Documents older than this many years are flagged.
pub const MAX_SDS_AGE_YEARS: f64 = 5.0;

/// Accepted date formats, tried in order; the first that parses wins.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%Y/%m/%d",
];

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("Invalid year regex"));

/// Outcome of the age check. Advisory only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SdsAge {
    /// The document is older than [`MAX_SDS_AGE_YEARS`].
    pub is_outdated: bool,
    /// Human-readable warning, present only when outdated.
    pub warning: Option<String>,
    /// Age in years, one decimal; `None` when the date could not be read.
    pub years_old: Option<f64>,
}

/// Parse an SDS date. A string carrying only a year resolves to 15 June of
/// that year.
pub fn parse_sds_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            let year = YEAR_RE.find(raw)?.as_str().parse().ok()?;
            NaiveDate::from_ymd_opt(year, 6, 15)
        })
}

/// Age of the SDS relative to `today`. Missing or unreadable dates are not
/// outdated.
pub fn check_sds_age(date: Option<&str>, today: NaiveDate) -> SdsAge {
    let Some(issued) = date.and_then(parse_sds_date) else {
        if let Some(raw) = date.filter(|d| !d.trim().is_empty()) {
            tracing::debug!(date = raw, "unreadable SDS date ignored");
        }
        return SdsAge::default();
    };
    let years = (today - issued).num_days() as f64 / 365.25;
    let years_old = (years * 10.0).round() / 10.0;
    let is_outdated = years > MAX_SDS_AGE_YEARS;
    SdsAge {
        is_outdated,
        warning: is_outdated
            .then(|| format!("SDS is {years_old:.1} years old. Review recommended.")),
        years_old: Some(years_old),
    }
}
