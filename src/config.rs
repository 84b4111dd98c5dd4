//! Runtime configuration from environment variables.

use std::path::PathBuf;

use crate::adapters::{CommandPrinter, ConfiguredPrinter, FilePrinter, ReportFormat};

pub const LOG_MODE_ENV: &str = "AKI_RISK_LOG_MODE";
pub const LOG_FILE_ENV: &str = "AKI_RISK_LOG_FILE";
pub const PRINT_COMMAND_ENV: &str = "AKI_RISK_PRINT_COMMAND";
pub const PRINT_DIR_ENV: &str = "AKI_RISK_PRINT_DIR";
pub const PRINT_FORMAT_ENV: &str = "AKI_RISK_PRINT_FORMAT";

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    /// File when stdout is a terminal, stdout otherwise
    #[default]
    Auto,
    File,
    Stdout,
}

impl LogMode {
    /// Whether to log to a file, given whether stdout is interactive.
    #[must_use]
    pub fn use_file(self, interactive: bool) -> bool {
        match self {
            Self::File => true,
            Self::Stdout => false,
            Self::Auto => interactive,
        }
    }
}

impl std::str::FromStr for LogMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "file" => Ok(Self::File),
            "stdout" => Ok(Self::Stdout),
            other => Err(format!("Unknown log mode: {other}")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_mode: LogMode,
    pub log_file: PathBuf,
    /// Print through this command instead of writing files
    pub print_command: Option<String>,
    pub print_dir: PathBuf,
    pub print_format: ReportFormat,
    /// Problems found while reading the environment, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_mode: LogMode::Auto,
            log_file: PathBuf::from("aki-risk.log"),
            print_command: None,
            print_dir: PathBuf::from("."),
            print_format: ReportFormat::Text,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Unknown values fall back to
    /// defaults and are recorded in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_MODE_ENV) {
            match raw.parse() {
                Ok(mode) => config.log_mode = mode,
                Err(e) => config.warnings.push(format!("{LOG_MODE_ENV}: {e}; using auto")),
            }
        }

        if let Some(path) = lookup(LOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        config.print_command = lookup(PRINT_COMMAND_ENV).filter(|v| !v.trim().is_empty());

        if let Some(dir) = lookup(PRINT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.print_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(PRINT_FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.print_format = format,
                Err(e) => config.warnings.push(format!("{PRINT_FORMAT_ENV}: {e}; using text")),
            }
        }

        config
    }

    /// Build the printer this configuration asks for.
    #[must_use]
    pub fn printer(&self) -> ConfiguredPrinter {
        match self.print_command.as_deref().and_then(CommandPrinter::from_command_line) {
            Some(command) => ConfiguredPrinter::Command(command),
            None => ConfiguredPrinter::File(FilePrinter::new(&self.print_dir, self.print_format)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.log_file, PathBuf::from("aki-risk.log"));
        assert!(config.print_command.is_none());
        assert!(config.warnings.is_empty());
        assert!(matches!(config.printer(), ConfiguredPrinter::File(_)));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_MODE_ENV, "stdout"),
            (LOG_FILE_ENV, "/tmp/aki.log"),
            (PRINT_COMMAND_ENV, "lp -d ward3"),
            (PRINT_FORMAT_ENV, "json"),
        ]));
        assert_eq!(config.log_mode, LogMode::Stdout);
        assert_eq!(config.log_file, PathBuf::from("/tmp/aki.log"));
        assert_eq!(config.print_format, ReportFormat::Json);
        assert!(matches!(config.printer(), ConfiguredPrinter::Command(_)));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warning() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_MODE_ENV, "syslog"),
            (PRINT_FORMAT_ENV, "pdf"),
            (PRINT_COMMAND_ENV, "  "),
        ]));
        assert_eq!(config.log_mode, LogMode::Auto);
        assert_eq!(config.print_format, ReportFormat::Text);
        assert!(config.print_command.is_none());
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn test_log_mode_auto() {
        assert!(LogMode::Auto.use_file(true));
        assert!(!LogMode::Auto.use_file(false));
        assert!(LogMode::File.use_file(false));
        assert!(!LogMode::Stdout.use_file(true));
    }
}
