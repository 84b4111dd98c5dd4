//! Score aggregation, risk-group classification and outcome prevalence.

use serde::{Deserialize, Serialize};

use super::input::ScoringInput;
use super::points::{EgfrCategory, HemoglobinStatus};

/// Why a score could not be computed.
///
/// The messages are shown to the user verbatim in the note line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("Please enter hemoglobin (g/dL) to calculate the score.")]
    MissingHemoglobin,

    #[error("Please enter eGFR (mL/min/1.73 m²) to calculate the score.")]
    MissingEgfr,

    #[error(
        "eGFR < 15 is not included in the published score table. Please verify the input or refer to the original publication."
    )]
    EgfrBelowTable,
}

/// Risk group of a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreBand {
    /// Score 0-4
    #[serde(rename = "<5")]
    Below5,
    /// Score 5-10
    #[serde(rename = "5-10")]
    From5To10,
    /// Score 11-15
    #[serde(rename = "11-15")]
    From11To15,
    /// Score 16 and above
    #[serde(rename = ">15")]
    Above15,
}

impl ScoreBand {
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Below5,
        ScoreBand::From5To10,
        ScoreBand::From11To15,
        ScoreBand::Above15,
    ];

    /// Classify a total score. Each band includes its lower bound.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score < 5 {
            Self::Below5
        } else if score <= 10 {
            Self::From5To10
        } else if score <= 15 {
            Self::From11To15
        } else {
            Self::Above15
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Below5 => "<5",
            Self::From5To10 => "5-10",
            Self::From11To15 => "11-15",
            Self::Above15 => ">15",
        }
    }

    /// Tabulated outcome percentages for this risk group.
    #[must_use]
    pub const fn prevalence(self) -> Prevalence {
        match self {
            Self::Below5 => Prevalence::new(3.8, 1.7, 0.0),
            Self::From5To10 => Prevalence::new(7.8, 2.9, 0.4),
            Self::From11To15 => Prevalence::new(21.6, 10.5, 3.2),
            Self::Above15 => Prevalence::new(48.7, 34.9, 16.5),
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Observed outcome rates of a risk group, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prevalence {
    /// Any acute kidney injury
    pub any: f64,
    /// AKI stage 2 or 3
    pub stage_2_3: f64,
    /// Kidney replacement therapy
    pub krt: f64,
}

impl Prevalence {
    #[must_use]
    pub const fn new(any: f64, stage_2_3: f64, krt: f64) -> Self {
        Self {
            any,
            stage_2_3,
            krt,
        }
    }
}

/// Points contributed by each input to a computed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub sex: u8,
    pub setting: u8,
    pub hemoglobin: u8,
    pub egfr: u8,
}

impl PointBreakdown {
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.sex + self.setting + self.hemoglobin + self.egfr
    }
}

/// A fully computed score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: u8,
    pub band: ScoreBand,
    pub prevalence: Prevalence,
    pub breakdown: PointBreakdown,
}

/// Compute the score for an input.
///
/// Hemoglobin is checked before eGFR; a missing value or an eGFR below the
/// table aborts without a partial score.
///
/// # Errors
/// Returns the first [`ScoreError`] that applies.
pub fn compute(input: &ScoringInput) -> Result<ScoreResult, ScoreError> {
    let hemoglobin = HemoglobinStatus::classify(input.hemoglobin).ok_or(ScoreError::MissingHemoglobin)?;
    let egfr = input.egfr.ok_or(ScoreError::MissingEgfr)?;
    let egfr_points = EgfrCategory::classify(egfr)
        .points()
        .ok_or(ScoreError::EgfrBelowTable)?;

    let breakdown = PointBreakdown {
        sex: input.sex.points(),
        setting: input.setting.points(),
        hemoglobin: hemoglobin.points(),
        egfr: egfr_points,
    };

    let total_score = breakdown.total();
    let band = ScoreBand::from_score(total_score);

    Ok(ScoreResult {
        total_score,
        band,
        prevalence: band.prevalence(),
        breakdown,
    })
}

/// Format a percentage: integral values without decimals, others with one.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "—".to_string();
    }
    if (value - value.round()).abs() < 1e-9 {
        format!("{}%", value.round())
    } else {
        format!("{value:.1}%")
    }
}
