//! Adapters layer: Concrete implementations of ports.
//!
//! - `printer`: file and system-command report printers
//! - `redact`: redaction-by-type wrapper for log output

pub mod printer;
pub mod redact;

pub use printer::{CommandPrinter, ConfiguredPrinter, FilePrinter, ReportFormat};
pub use redact::Redacted;
