//! Domain layer: scoring inputs, point tables and risk groups.
//!
//! Pure types with no I/O. All lookup tables are immutable constants.

mod input;
mod points;
mod report;
mod score;

pub use input::{parse_bounded, ScoringInput, Setting, Sex, EGFR_RANGE, HEMOGLOBIN_RANGE};
pub use points::{
    EgfrBand, EgfrCategory, HemoglobinStatus, InlinePoints, EGFR_BANDS, LOW_HEMOGLOBIN_POINTS,
    LOW_HEMOGLOBIN_THRESHOLD, MAX_TOTAL_POINTS,
};
pub use report::{points_text, Report, ResultDisplay, PLACEHOLDER};
pub use score::{compute, format_percent, PointBreakdown, Prevalence, ScoreBand, ScoreError, ScoreResult};
