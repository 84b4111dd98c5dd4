//! Ports layer: Trait definitions for external operations.
//!
//! These traits define the boundary between the calculator and the host
//! environment (currently only printing).

mod printer;

pub use printer::{PrintError, PrintReceipt, ReportPrinter};
