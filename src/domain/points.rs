//! Point tables for the four score inputs.
//!
//! Sex and setting map directly to points. Hemoglobin and eGFR are first
//! classified into bands; a band may have no points, which blocks scoring.

use serde::{Deserialize, Serialize};

use super::input::{Setting, Sex};

/// Hemoglobin strictly below this value (g/dL) counts as low.
pub const LOW_HEMOGLOBIN_THRESHOLD: f64 = 10.0;

/// Points added for low hemoglobin.
pub const LOW_HEMOGLOBIN_POINTS: u8 = 3;

/// Highest possible total score.
pub const MAX_TOTAL_POINTS: u8 =
    Sex::Male.points() + Setting::Icu.points() + LOW_HEMOGLOBIN_POINTS + 9;

impl Sex {
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Female => 0,
            Self::Male => 1,
        }
    }
}

impl Setting {
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Opd => 0,
            Self::NonIcu => 4,
            Self::Icu => 11,
        }
    }
}

/// Hemoglobin classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HemoglobinStatus {
    /// Below 10 g/dL
    Low,
    NotLow,
}

impl HemoglobinStatus {
    /// Classify a hemoglobin value. `None` stays unknown.
    #[must_use]
    pub fn classify(hemoglobin: Option<f64>) -> Option<Self> {
        hemoglobin.map(|hb| {
            if hb < LOW_HEMOGLOBIN_THRESHOLD {
                Self::Low
            } else {
                Self::NotLow
            }
        })
    }

    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Low => LOW_HEMOGLOBIN_POINTS,
            Self::NotLow => 0,
        }
    }
}

/// eGFR category, ordered from best to worst kidney function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EgfrCategory {
    AtLeast90,
    From60To90,
    From45To60,
    From30To45,
    From15To30,
    /// Outside the published score table
    Below15,
}

impl EgfrCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AtLeast90 => "≥ 90",
            Self::From60To90 => "≥ 60 to < 90",
            Self::From45To60 => "≥ 45 to < 60",
            Self::From30To45 => "≥ 30 to < 45",
            Self::From15To30 => "≥ 15 to < 30",
            Self::Below15 => "< 15 (not in score table)",
        }
    }

    /// Points for this category, `None` for `Below15`.
    #[must_use]
    pub const fn points(self) -> Option<u8> {
        match self {
            Self::AtLeast90 => Some(0),
            Self::From60To90 => Some(1),
            Self::From45To60 => Some(2),
            Self::From30To45 => Some(5),
            Self::From15To30 => Some(9),
            Self::Below15 => None,
        }
    }

    /// Classify an eGFR value into its band.
    ///
    /// Bands are half-open with an inclusive lower bound: 90 is `AtLeast90`,
    /// 89.9 is `From60To90`.
    #[must_use]
    pub fn classify(egfr: f64) -> Self {
        EGFR_BANDS
            .iter()
            .find(|band| egfr >= band.lower_bound)
            .map_or(Self::Below15, |band| band.category)
    }
}

impl std::fmt::Display for EgfrCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One rung of the eGFR threshold ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EgfrBand {
    /// Inclusive lower bound in mL/min/1.73 m²
    pub lower_bound: f64,
    pub category: EgfrCategory,
}

impl EgfrBand {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    #[must_use]
    pub fn points(&self) -> Option<u8> {
        self.category.points()
    }
}

/// The eGFR ladder in descending order of lower bound.
pub static EGFR_BANDS: [EgfrBand; 6] = [
    EgfrBand { lower_bound: 90.0, category: EgfrCategory::AtLeast90 },
    EgfrBand { lower_bound: 60.0, category: EgfrCategory::From60To90 },
    EgfrBand { lower_bound: 45.0, category: EgfrCategory::From45To60 },
    EgfrBand { lower_bound: 30.0, category: EgfrCategory::From30To45 },
    EgfrBand { lower_bound: 15.0, category: EgfrCategory::From15To30 },
    EgfrBand { lower_bound: f64::NEG_INFINITY, category: EgfrCategory::Below15 },
];

/// Points attributed to each input, as far as they are known.
///
/// This is what the form shows next to each field while the user types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InlinePoints {
    pub sex: u8,
    pub setting: u8,
    /// `None` while hemoglobin is not provided
    pub hemoglobin: Option<u8>,
    /// `None` while eGFR is not provided
    pub egfr_category: Option<EgfrCategory>,
}

impl InlinePoints {
    #[must_use]
    pub fn from_input(input: &super::ScoringInput) -> Self {
        Self {
            sex: input.sex.points(),
            setting: input.setting.points(),
            hemoglobin: HemoglobinStatus::classify(input.hemoglobin).map(HemoglobinStatus::points),
            egfr_category: input.egfr.map(EgfrCategory::classify),
        }
    }

    /// eGFR points; `None` when missing or below the table.
    #[must_use]
    pub fn egfr(&self) -> Option<u8> {
        self.egfr_category.and_then(EgfrCategory::points)
    }

    /// Category label, "—" when eGFR is missing.
    #[must_use]
    pub fn egfr_label(&self) -> &'static str {
        self.egfr_category.map_or("—", EgfrCategory::label)
    }
}
