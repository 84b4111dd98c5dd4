//! Application layer: Use cases and services.
//!
//! This module drives the domain scoring from a form snapshot and hands
//! reports to the printer port.

mod calculator;

pub use calculator::{CalculatorService, FormSnapshot, NumericField};
