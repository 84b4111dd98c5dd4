//! Report printers: file output and system print command.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::Report;
use crate::ports::{PrintError, PrintReceipt, ReportPrinter};

/// Output format of file reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown report format: {other}")),
        }
    }
}

/// Writes each report to a new file in a directory.
#[derive(Debug, Clone)]
pub struct FilePrinter {
    dir: PathBuf,
    format: ReportFormat,
}

impl FilePrinter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(&self, report: &Report) -> String {
        format!(
            "aki-risk-{}.{}",
            report.generated_at.format("%Y%m%d-%H%M%S-%3f"),
            self.format.extension()
        )
    }
}

impl ReportPrinter for FilePrinter {
    fn print(&self, report: &Report) -> Result<PrintReceipt, PrintError> {
        std::fs::create_dir_all(&self.dir)?;

        let contents = match self.format {
            ReportFormat::Text => report.to_text(),
            ReportFormat::Json => serde_json::to_string_pretty(report)?,
        };

        let path = self.dir.join(self.file_name(report));
        std::fs::write(&path, contents)?;

        tracing::info!(path = %path.display(), "Report written");
        Ok(PrintReceipt::File(path))
    }
}

/// Pipes the plain-text report into a print command such as `lp`.
#[derive(Debug, Clone)]
pub struct CommandPrinter {
    program: String,
    args: Vec<String>,
}

impl CommandPrinter {
    /// Build a printer from a command line. Arguments are split on whitespace.
    ///
    /// Returns `None` for a blank command line.
    #[must_use]
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failure(&self, reason: impl Into<String>) -> PrintError {
        PrintError::Command {
            command: self.command_line(),
            reason: reason.into(),
        }
    }
}

impl ReportPrinter for CommandPrinter {
    fn print(&self, report: &Report) -> Result<PrintReceipt, PrintError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits without reading closes the pipe early;
            // its exit status decides the outcome.
            match stdin.write_all(report.to_text().as_bytes()) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(PrintError::Io(e)),
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                msg => msg.to_string(),
            };
            return Err(self.failure(reason));
        }

        tracing::info!(command = %self.command_line(), "Report spooled");
        Ok(PrintReceipt::Spooled {
            command: self.command_line(),
        })
    }
}

/// Printer selected at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredPrinter {
    File(FilePrinter),
    Command(CommandPrinter),
}

impl ReportPrinter for ConfiguredPrinter {
    fn print(&self, report: &Report) -> Result<PrintReceipt, PrintError> {
        match self {
            Self::File(p) => p.print(report),
            Self::Command(p) => p.print(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InlinePoints, ResultDisplay, ScoringInput, Setting, Sex};

    fn sample_report() -> Report {
        let input = ScoringInput::from_raw(Sex::Female, Setting::Opd, "12", "95");
        let mut display = ResultDisplay::default();
        display.show(&crate::domain::compute(&input).expect("Should score"));
        Report {
            generated_at: chrono::Utc::now(),
            sex: input.sex,
            setting: input.setting,
            hemoglobin_entry: "12".to_string(),
            egfr_entry: "95".to_string(),
            inline: InlinePoints::from_input(&input),
            display,
        }
    }

    #[test]
    fn test_file_printer_text() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let printer = FilePrinter::new(dir.path(), ReportFormat::Text);

        let receipt = printer.print(&sample_report()).expect("Should print");
        let PrintReceipt::File(path) = receipt else {
            panic!("Expected a file receipt");
        };

        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));
        let contents = std::fs::read_to_string(&path).expect("Should read report");
        assert!(contents.contains("Total score: 0"));
        assert!(contents.contains("Risk group: <5 points"));
    }

    #[test]
    fn test_file_printer_json() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let printer = FilePrinter::new(dir.path().join("nested"), ReportFormat::Json);

        let PrintReceipt::File(path) = printer.print(&sample_report()).expect("Should print") else {
            panic!("Expected a file receipt");
        };

        let contents = std::fs::read_to_string(&path).expect("Should read report");
        let value: serde_json::Value = serde_json::from_str(&contents).expect("Valid JSON");
        assert_eq!(value["display"]["total_score"], 0);
        assert_eq!(value["display"]["band"], "<5");
        assert_eq!(value["sex"], "female");
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("txt".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_command_line_parsing() {
        assert!(CommandPrinter::from_command_line("   ").is_none());
        let printer = CommandPrinter::from_command_line("lp -d  office").expect("Should parse");
        assert_eq!(printer.command_line(), "lp -d office");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_printer_success() {
        let printer = CommandPrinter::from_command_line("cat").expect("Should parse");
        let receipt = printer.print(&sample_report()).expect("cat should accept the report");
        assert_eq!(
            receipt,
            PrintReceipt::Spooled {
                command: "cat".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_command_printer_failure() {
        let printer = CommandPrinter::from_command_line("false").expect("Should parse");
        let err = printer.print(&sample_report()).expect_err("false should fail");
        assert!(matches!(err, PrintError::Command { .. }));
    }

    #[test]
    fn test_command_printer_missing_program() {
        let printer =
            CommandPrinter::from_command_line("definitely-not-a-print-command-1234").expect("Should parse");
        let err = printer.print(&sample_report()).expect_err("Should fail to spawn");
        assert!(matches!(err, PrintError::Command { .. }));
    }
}
