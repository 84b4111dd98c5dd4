//! # AKI Risk
//!
//! Terminal calculator for an acute kidney injury risk score.
//!
//! Four inputs (sex, care setting, hemoglobin, eGFR) are mapped to points,
//! summed, and the total is placed in one of four risk groups with
//! tabulated rates of any AKI, AKI stage 2/3 and kidney replacement therapy.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Scoring inputs, point tables, risk groups (pure, no I/O)
//! - `ports`: Trait definitions for external operations (printing)
//! - `adapters`: Concrete implementations (file/command printers, log redaction)
//! - `application`: The calculator service driving the form
//! - `tui`: Terminal user interface
//!
//! `config` reads the environment and `logging` sets up `tracing`.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod tui;

pub use application::CalculatorService;
pub use domain::{compute, ScoreBand, ScoreError, ScoreResult, ScoringInput};

/// Result type for AKI Risk operations
pub type Result<T> = std::result::Result<T, AkiRiskError>;

/// Main error type for AKI Risk
#[derive(Debug, thiserror::Error)]
pub enum AkiRiskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
