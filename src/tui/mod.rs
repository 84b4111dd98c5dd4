//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides:
//! - Calculator form with live per-field points
//! - Result panel with risk group and outcome gauges
//! - Reference tables

mod app;
mod styles;
mod ui;

pub use app::{App, Screen};
pub use styles::Theme;
pub use ui::calculator::{FormField, StatusLine};
