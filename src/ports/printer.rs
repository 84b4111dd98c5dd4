//! Printer port: where a calculator report goes when the user prints.
//!
//! The terminal has no print dialog, so printing is delegated to an adapter
//! (a file on disk or the system print spooler).

use std::path::PathBuf;

use crate::domain::Report;

/// Errors that can occur while printing a report.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Print command `{command}` failed: {reason}")]
    Command { command: String, reason: String },
}

/// Where a printed report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintReceipt {
    /// Written to a file
    File(PathBuf),
    /// Handed to a print command
    Spooled { command: String },
}

impl std::fmt::Display for PrintReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "Report saved to {}", path.display()),
            Self::Spooled { command } => write!(f, "Report sent to `{command}`"),
        }
    }
}

/// Trait for report output.
///
/// Implementations print the report as-is; they never alter the calculator.
pub trait ReportPrinter {
    /// Print a report.
    ///
    /// # Errors
    /// Returns `PrintError` if the report could not be delivered.
    fn print(&self, report: &Report) -> Result<PrintReceipt, PrintError>;
}
