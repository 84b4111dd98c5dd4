//! Printable snapshot of the calculator.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::input::{Setting, Sex};
use super::points::InlinePoints;
use super::score::{format_percent, Prevalence, ScoreBand, ScoreResult};

/// Placeholder shown for any value that has not been computed.
pub const PLACEHOLDER: &str = "—";

/// Result area of the calculator.
///
/// Every field is optional; `None` is shown as [`PLACEHOLDER`]. A failed
/// calculation only replaces `note`, so earlier results stay visible.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultDisplay {
    pub total_score: Option<u8>,
    pub band: Option<ScoreBand>,
    pub prevalence: Option<Prevalence>,
    pub note: Option<String>,
}

impl ResultDisplay {
    /// Show a computed result and clear the note.
    pub fn show(&mut self, result: &ScoreResult) {
        self.total_score = Some(result.total_score);
        self.band = Some(result.band);
        self.prevalence = Some(result.prevalence);
        self.note = None;
    }

    #[must_use]
    pub fn total_text(&self) -> String {
        self.total_score
            .map_or_else(|| PLACEHOLDER.to_string(), |s| s.to_string())
    }

    #[must_use]
    pub fn risk_group_text(&self) -> String {
        match self.band {
            Some(band) => format!("Risk group: {band} points"),
            None => format!("Risk group: {PLACEHOLDER}"),
        }
    }

    /// Percentages as (any AKI, AKI stage 2/3, KRT).
    #[must_use]
    pub fn percent_texts(&self) -> [String; 3] {
        match self.prevalence {
            Some(p) => [
                format_percent(p.any),
                format_percent(p.stage_2_3),
                format_percent(p.krt),
            ],
            None => [
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
                PLACEHOLDER.to_string(),
            ],
        }
    }

    /// True when nothing is shown and there is no note.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Format an optional point value as "Points: n" or "Points: —".
#[must_use]
pub fn points_text(points: Option<u8>) -> String {
    match points {
        Some(p) => format!("Points: {p}"),
        None => format!("Points: {PLACEHOLDER}"),
    }
}

/// Everything the calculator currently shows, as it would be printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub sex: Sex,
    pub setting: Setting,
    /// Hemoglobin field text as entered
    pub hemoglobin_entry: String,
    /// eGFR field text as entered
    pub egfr_entry: String,
    pub inline: InlinePoints,
    pub display: ResultDisplay,
}

impl Report {
    /// Render the report as plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let entry = |s: &str| if s.trim().is_empty() { PLACEHOLDER.to_string() } else { s.trim().to_string() };
        let [any, stage_2_3, krt] = self.display.percent_texts();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "AKI Risk Score");
        let _ = writeln!(out, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
        let _ = writeln!(out);
        let _ = writeln!(out, "Sex:         {:<24} {}", self.sex, points_text(Some(self.inline.sex)));
        let _ = writeln!(out, "Setting:     {:<24} {}", self.setting, points_text(Some(self.inline.setting)));
        let _ = writeln!(
            out,
            "Hemoglobin:  {:<24} {}",
            format!("{} g/dL", entry(&self.hemoglobin_entry)),
            points_text(self.inline.hemoglobin)
        );
        let _ = writeln!(
            out,
            "eGFR:        {:<24} {}",
            format!("{} mL/min/1.73 m²", entry(&self.egfr_entry)),
            points_text(self.inline.egfr())
        );
        let _ = writeln!(out, "             Category: {}", self.inline.egfr_label());
        let _ = writeln!(out);
        let _ = writeln!(out, "Total score: {}", self.display.total_text());
        let _ = writeln!(out, "{}", self.display.risk_group_text());
        let _ = writeln!(out, "Any AKI:     {any}");
        let _ = writeln!(out, "AKI 2/3:     {stage_2_3}");
        let _ = writeln!(out, "KRT:         {krt}");

        if let Some(note) = &self.display.note {
            let _ = writeln!(out);
            let _ = writeln!(out, "Note: {note}");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, ScoringInput};

    fn sample_report(display: ResultDisplay) -> Report {
        let input = ScoringInput::from_raw(Sex::Male, Setting::Icu, "8", "50");
        Report {
            generated_at: chrono::Utc::now(),
            sex: input.sex,
            setting: input.setting,
            hemoglobin_entry: "8".to_string(),
            egfr_entry: "50".to_string(),
            inline: InlinePoints::from_input(&input),
            display,
        }
    }

    #[test]
    fn test_blank_display_uses_placeholders() {
        let display = ResultDisplay::default();
        assert!(display.is_blank());
        assert_eq!(display.total_text(), "—");
        assert_eq!(display.risk_group_text(), "Risk group: —");
        assert_eq!(display.percent_texts(), ["—", "—", "—"].map(String::from));
    }

    #[test]
    fn test_show_clears_note() {
        let mut display = ResultDisplay {
            note: Some("stale".to_string()),
            ..Default::default()
        };
        let input = ScoringInput::from_raw(Sex::Male, Setting::Icu, "8", "50");
        display.show(&compute(&input).expect("Should score"));

        assert_eq!(display.total_text(), "17");
        assert_eq!(display.risk_group_text(), "Risk group: >15 points");
        assert!(display.note.is_none());
    }

    #[test]
    fn test_points_text() {
        assert_eq!(points_text(Some(3)), "Points: 3");
        assert_eq!(points_text(None), "Points: —");
    }

    #[test]
    fn test_report_text_contains_results() {
        let input = ScoringInput::from_raw(Sex::Male, Setting::Icu, "8", "50");
        let mut display = ResultDisplay::default();
        display.show(&compute(&input).expect("Should score"));

        let text = sample_report(display).to_text();
        assert!(text.contains("Total score: 17"));
        assert!(text.contains("Risk group: >15 points"));
        assert!(text.contains("48.7%"));
        assert!(text.contains("Category: ≥ 45 to < 60"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn test_report_text_includes_note() {
        let display = ResultDisplay {
            note: Some("Please enter eGFR".to_string()),
            ..Default::default()
        };
        let text = sample_report(display).to_text();
        assert!(text.contains("Total score: —"));
        assert!(text.contains("Note: Please enter eGFR"));
    }
}
