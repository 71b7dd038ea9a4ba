//! Tests for the logger module

use std::path::PathBuf;

use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

use crate::logger::config::*;
use crate::logger::{LoggerError, build_layers};

fn file_config(dir: &TempDir, format: LogFormat) -> LoggerConfig {
    LoggerConfig {
        console: ConsoleConfig::new(false, false),
        file: FileConfig {
            enabled: true,
            path: dir.path().join("logs").join("notify.log"),
            format,
        },
        level: "debug".to_string(),
    }
}

fn emit_through(config: &LoggerConfig) {
    let layers = build_layers(config).expect("layers should build");
    let subscriber = tracing_subscriber::registry().with(layers);
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(provider = "telegram", "Notification sent");
    });
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_both_outputs_disabled() {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        assert!(matches!(config.validate(), Err(LoggerError::Config { .. })));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = LoggerConfig {
            level: "loud".to_string(),
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filter_directives_are_not_levels() {
        let config = LoggerConfig {
            level: "notify_cli=debug,warn".to_string(),
            ..LoggerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_is_case_insensitive() {
        for level in ["TRACE", "Debug", "info", "WaRn", "error"] {
            let config = LoggerConfig {
                level: level.to_string(),
                ..LoggerConfig::default()
            };
            assert!(config.validate().is_ok(), "{level} should be accepted");
        }
    }

    #[test]
    fn test_with_level_override() {
        let config = LoggerConfig::default().with_level(Level::DEBUG);
        assert_eq!(config.level, "debug");
        assert_eq!(config.parse_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_enabled_file_requires_path() {
        let result = FileConfig::new(true, PathBuf::new(), LogFormat::Json);
        assert!(result.is_err());

        let disabled = FileConfig::new(false, PathBuf::new(), LogFormat::Json);
        assert!(disabled.is_ok());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("full".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("COMPACT".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_as_str() {
        for format in [LogFormat::Full, LogFormat::Compact, LogFormat::Json] {
            assert_eq!(format.as_str().parse::<LogFormat>().unwrap(), format);
        }
    }
}

mod layer_tests {
    use super::*;

    #[test]
    fn test_layer_count_follows_outputs() {
        let dir = TempDir::new().unwrap();

        let console_only = LoggerConfig::default();
        assert_eq!(build_layers(&console_only).unwrap().len(), 1);

        let mut both = file_config(&dir, LogFormat::Full);
        both.console.enabled = true;
        assert_eq!(build_layers(&both).unwrap().len(), 2);
    }

    #[test]
    fn test_file_output_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, LogFormat::Full);

        emit_through(&config);

        let contents = std::fs::read_to_string(&config.file.path).unwrap();
        assert!(contents.contains("Notification sent"));
        assert!(contents.contains("INFO"));
    }

    #[test]
    fn test_json_file_output() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, LogFormat::Json);

        emit_through(&config);

        let contents = std::fs::read_to_string(&config.file.path).unwrap();
        let line = contents.lines().next().expect("one log line");
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["fields"]["message"], "Notification sent");
        assert_eq!(event["fields"]["provider"], "telegram");
    }

    #[test]
    fn test_file_output_appends() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, LogFormat::Compact);

        emit_through(&config);
        emit_through(&config);

        let contents = std::fs::read_to_string(&config.file.path).unwrap();
        assert_eq!(contents.matches("Notification sent").count(), 2);
        assert!(!contents.contains('\u{1b}'));
    }

    #[test]
    fn test_unwritable_file_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let mut config = file_config(&dir, LogFormat::Full);
        config.file.path = blocker.join("notify.log");

        assert!(matches!(build_layers(&config), Err(LoggerError::Io(_))));
    }
}
