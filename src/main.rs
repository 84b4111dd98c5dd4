//! AKI Risk: terminal score calculator.
//!
//! Main entry point for the terminal application.

use anyhow::Result;
use std::io::IsTerminal;

use aki_risk::config::Config;
use aki_risk::logging;
use aki_risk::tui::App;

fn main() -> Result<()> {
    let config = Config::from_env();
    let interactive = std::io::stdout().is_terminal();

    let _guard = logging::init(&config, interactive)?;

    tracing::info!("Starting AKI Risk calculator...");

    let mut app = App::new(&config);
    app.run()?;

    tracing::info!("AKI Risk calculator shutdown complete.");
    Ok(())
}
