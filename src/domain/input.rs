//! Scoring inputs: categorical selectors and bounded lab values.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Accepted hemoglobin range in g/dL. Values outside are clamped.
pub const HEMOGLOBIN_RANGE: RangeInclusive<f64> = 0.0..=25.0;

/// Accepted eGFR range in mL/min/1.73 m². Values outside are clamped.
pub const EGFR_RANGE: RangeInclusive<f64> = 0.0..=200.0;

/// Patient sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    /// Next option, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Female => Self::Male,
            Self::Male => Self::Female,
        }
    }

    /// Previous option, wrapping around. With two options this is `next`.
    #[must_use]
    pub fn prev(self) -> Self {
        self.next()
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            other => Err(format!("Unknown sex: {other}")),
        }
    }
}

/// Care setting in which the patient is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    /// Outpatient department
    #[default]
    Opd,
    /// Hospital ward outside intensive care
    NonIcu,
    /// Intensive care unit
    Icu,
}

impl Setting {
    pub const ALL: [Setting; 3] = [Setting::Opd, Setting::NonIcu, Setting::Icu];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Opd => "Outpatient (OPD)",
            Self::NonIcu => "Inpatient, non-ICU",
            Self::Icu => "Inpatient, ICU",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Opd => Self::NonIcu,
            Self::NonIcu => Self::Icu,
            Self::Icu => Self::Opd,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Opd => Self::Icu,
            Self::NonIcu => Self::Opd,
            Self::Icu => Self::NonIcu,
        }
    }
}

impl std::fmt::Display for Setting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "opd" => Ok(Self::Opd),
            "nonicu" | "non-icu" => Ok(Self::NonIcu),
            "icu" => Ok(Self::Icu),
            other => Err(format!("Unknown setting: {other}")),
        }
    }
}

/// Parse user-entered numeric text and clamp it into `range`.
///
/// Empty, non-numeric and non-finite text yields `None` ("not provided"),
/// which is distinct from zero. Out-of-range numbers are coerced to the
/// nearest bound without error.
#[must_use]
pub fn parse_bounded(raw: &str, range: &RangeInclusive<f64>) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(value.clamp(*range.start(), *range.end()))
}

/// The four scoring inputs after parsing and clamping.
///
/// Rebuilt from the form on every recompute; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringInput {
    pub sex: Sex,
    pub setting: Setting,

    /// Hemoglobin in g/dL, `None` when not provided
    pub hemoglobin: Option<f64>,

    /// eGFR in mL/min/1.73 m², `None` when not provided
    pub egfr: Option<f64>,
}

impl ScoringInput {
    /// Build an input from the raw text of the numeric fields.
    #[must_use]
    pub fn from_raw(sex: Sex, setting: Setting, hemoglobin: &str, egfr: &str) -> Self {
        Self {
            sex,
            setting,
            hemoglobin: parse_bounded(hemoglobin, &HEMOGLOBIN_RANGE),
            egfr: parse_bounded(egfr, &EGFR_RANGE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bounded_blank_is_not_provided() {
        assert_eq!(parse_bounded("", &HEMOGLOBIN_RANGE), None);
        assert_eq!(parse_bounded("   ", &HEMOGLOBIN_RANGE), None);
    }

    #[test]
    fn test_parse_bounded_rejects_garbage() {
        assert_eq!(parse_bounded("abc", &EGFR_RANGE), None);
        assert_eq!(parse_bounded("1.2.3", &EGFR_RANGE), None);
        assert_eq!(parse_bounded("-", &EGFR_RANGE), None);
        assert_eq!(parse_bounded("inf", &EGFR_RANGE), None);
        assert_eq!(parse_bounded("NaN", &EGFR_RANGE), None);
    }

    #[test]
    fn test_parse_bounded_zero_is_a_value() {
        assert_eq!(parse_bounded("0", &HEMOGLOBIN_RANGE), Some(0.0));
    }

    #[test]
    fn test_parse_bounded_clamps_silently() {
        assert_eq!(parse_bounded("40", &HEMOGLOBIN_RANGE), Some(25.0));
        assert_eq!(parse_bounded("-3", &HEMOGLOBIN_RANGE), Some(0.0));
        assert_eq!(parse_bounded("250", &EGFR_RANGE), Some(200.0));
        assert_eq!(parse_bounded(" 55.5 ", &EGFR_RANGE), Some(55.5));
    }

    #[test]
    fn test_from_raw() {
        let input = ScoringInput::from_raw(Sex::Male, Setting::Icu, "8", "");
        assert_eq!(input.hemoglobin, Some(8.0));
        assert_eq!(input.egfr, None);
    }

    #[test]
    fn test_selector_cycling() {
        assert_eq!(Setting::Opd.next(), Setting::NonIcu);
        assert_eq!(Setting::Icu.next(), Setting::Opd);
        assert_eq!(Setting::Opd.prev(), Setting::Icu);
        assert_eq!(Sex::Female.next(), Sex::Male);
        assert_eq!(Sex::Male.prev(), Sex::Female);
    }

    #[test]
    fn test_selector_parsing() {
        assert_eq!("nonicu".parse::<Setting>(), Ok(Setting::NonIcu));
        assert_eq!("MALE".parse::<Sex>(), Ok(Sex::Male));
        assert!("ward".parse::<Setting>().is_err());
    }
}
