//! CLI module for notify-cli
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Settings loading and logger setup
//! - Interactive setup prompts
//! - Command handlers and error reporting

pub mod executor;
pub mod handlers;
pub mod parser;
pub mod prompt;
pub mod validation;

pub use executor::{describe_error, execute_command, report_error};
pub use parser::{Cli, Commands};

use tracing::Level;

use crate::config::{ConfigError, ConfigLoader, Settings};
use crate::logger::{LoggerConfig, init_logger};
use crate::utils::DataPaths;

/// Load settings from `<data dir>/config.toml` and the environment
pub fn load_settings(paths: &DataPaths) -> Result<Settings, ConfigError> {
    ConfigLoader::new(paths.settings_path()).load()
}

/// Logger configuration after applying `--verbose` / `--quiet`
pub fn logger_config(
    cli: &Cli,
    settings: &Settings,
    paths: &DataPaths,
) -> Result<LoggerConfig, ConfigError> {
    let config = settings.logger.clone().into_logger_config(paths)?;

    Ok(if cli.verbose {
        config.with_level(Level::DEBUG)
    } else if cli.quiet {
        config.with_level(Level::ERROR)
    } else {
        config
    })
}

/// Initialize the global logger from settings and CLI flags
pub fn init_logger_from_settings(
    cli: &Cli,
    settings: &Settings,
    paths: &DataPaths,
) -> anyhow::Result<()> {
    let config = logger_config(cli, settings, paths)?;
    init_logger(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv.iter().copied()).unwrap()
    }

    #[test]
    fn test_logger_level_follows_flags() {
        let paths = DataPaths::new("/tmp/notify-test");
        let settings = Settings::default();

        let plain = logger_config(&cli(&["notify"]), &settings, &paths).unwrap();
        assert_eq!(plain.level, "warn");

        let verbose = logger_config(&cli(&["notify", "-v"]), &settings, &paths).unwrap();
        assert_eq!(verbose.level, "debug");

        let quiet = logger_config(&cli(&["notify", "--quiet"]), &settings, &paths).unwrap();
        assert_eq!(quiet.level, "error");
    }

    #[test]
    fn test_load_settings_from_data_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let paths = DataPaths::new(temp_dir.path());
        std::fs::write(paths.settings_path(), "[http]\nrequest_timeout_secs = 15\n").unwrap();

        let settings = load_settings(&paths).unwrap();
        assert_eq!(settings.http.request_timeout_secs, 15);
    }
}
