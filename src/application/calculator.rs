//! Calculator service: the form snapshot and the actions on it.
//!
//! Every action rebuilds derived state from the whole snapshot; nothing is
//! patched incrementally.

use zeroize::Zeroize;

use crate::adapters::Redacted;
use crate::domain::{compute, InlinePoints, Report, ResultDisplay, ScoringInput, Setting, Sex};
use crate::ports::{PrintError, PrintReceipt, ReportPrinter};

/// Which numeric field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Hemoglobin,
    Egfr,
}

/// Raw contents of the four form fields.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub sex: Sex,
    pub setting: Setting,
    pub hemoglobin: Redacted<String>,
    pub egfr: Redacted<String>,
}

impl FormSnapshot {
    #[must_use]
    pub fn to_input(&self) -> ScoringInput {
        ScoringInput::from_raw(self.sex, self.setting, self.hemoglobin.expose(), self.egfr.expose())
    }

    fn field_mut(&mut self, field: NumericField) -> &mut Redacted<String> {
        match field {
            NumericField::Hemoglobin => &mut self.hemoglobin,
            NumericField::Egfr => &mut self.egfr,
        }
    }
}

/// Service behind the calculator form.
pub struct CalculatorService {
    form: FormSnapshot,
    inline: InlinePoints,
    display: ResultDisplay,
}

impl Default for CalculatorService {
    fn default() -> Self {
        let form = FormSnapshot::default();
        let inline = InlinePoints::from_input(&form.to_input());
        Self {
            form,
            inline,
            display: ResultDisplay::default(),
        }
    }
}

impl CalculatorService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &FormSnapshot {
        &self.form
    }

    #[must_use]
    pub fn inline_points(&self) -> &InlinePoints {
        &self.inline
    }

    #[must_use]
    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }

    /// Rebuild the per-field points from the current form.
    ///
    /// Called after every edit. The result area is left alone.
    pub fn recompute_inline(&mut self) {
        self.inline = InlinePoints::from_input(&self.form.to_input());
    }

    pub fn set_sex(&mut self, sex: Sex) {
        self.form.sex = sex;
        self.recompute_inline();
    }

    pub fn set_setting(&mut self, setting: Setting) {
        self.form.setting = setting;
        self.recompute_inline();
    }

    /// Replace the text of a numeric field.
    pub fn set_numeric(&mut self, field: NumericField, text: &str) {
        let slot = self.form.field_mut(field);
        slot.zeroize();
        *slot = Redacted::new(text.to_string());
        self.recompute_inline();
    }

    /// Append a character to a numeric field.
    ///
    /// Only digits, `.` and `-` are accepted; returns whether the field changed.
    pub fn push_char(&mut self, field: NumericField, c: char) -> bool {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return false;
        }
        let mut text = self.form.field_mut(field).expose().clone();
        text.push(c);
        self.set_numeric(field, &text);
        text.zeroize();
        true
    }

    /// Remove the last character of a numeric field.
    pub fn pop_char(&mut self, field: NumericField) {
        let mut text = self.form.field_mut(field).expose().clone();
        if text.pop().is_some() {
            self.set_numeric(field, &text);
        }
        text.zeroize();
    }

    /// Clear one numeric field.
    pub fn clear_field(&mut self, field: NumericField) {
        self.set_numeric(field, "");
    }

    /// Validate the form and compute the score.
    ///
    /// On failure only the note changes; results from an earlier calculation
    /// stay on screen. On success the note is cleared.
    pub fn calculate(&mut self) -> &ResultDisplay {
        let input = self.form.to_input();
        self.inline = InlinePoints::from_input(&input);

        match compute(&input) {
            Ok(result) => {
                tracing::info!(
                    total_score = result.total_score,
                    band = %result.band,
                    hemoglobin = ?self.form.hemoglobin,
                    egfr = ?self.form.egfr,
                    "Score calculated"
                );
                self.display.show(&result);
            }
            Err(e) => {
                tracing::debug!(reason = ?e, "Calculation rejected");
                self.display.note = Some(e.to_string());
            }
        }

        &self.display
    }

    /// Restore the initial state: default selectors, blank numeric fields,
    /// placeholder results and no note.
    pub fn reset(&mut self) {
        self.form.hemoglobin.zeroize();
        self.form.egfr.zeroize();
        self.form = FormSnapshot::default();
        self.recompute_inline();
        self.display = ResultDisplay::default();
        tracing::debug!("Calculator reset");
    }

    /// Fill the form with a typical high-risk example.
    pub fn load_sample(&mut self) {
        self.form.sex = Sex::Male;
        self.form.setting = Setting::Icu;
        self.set_numeric(NumericField::Hemoglobin, "8");
        self.set_numeric(NumericField::Egfr, "50");
    }

    /// Snapshot of what the calculator currently shows.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            generated_at: chrono::Utc::now(),
            sex: self.form.sex,
            setting: self.form.setting,
            hemoglobin_entry: self.form.hemoglobin.expose().clone(),
            egfr_entry: self.form.egfr.expose().clone(),
            inline: self.inline,
            display: self.display.clone(),
        }
    }

    /// Print the current state through `printer`.
    ///
    /// # Errors
    /// Returns `PrintError` if the printer fails; the calculator is unchanged.
    pub fn print<P: ReportPrinter + ?Sized>(&self, printer: &P) -> Result<PrintReceipt, PrintError> {
        let report = self.report();
        printer.print(&report).inspect_err(|e| tracing::error!("Printing failed: {}", e))
    }
}
