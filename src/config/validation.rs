//! Configuration validation logic
//!
//! Validation runs once after loading so that a bad `config.toml` or
//! environment override is reported before any command does work.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, HttpConfig, LoggerSettings, Settings, TelegramApiConfig};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl TelegramApiConfig {
    /// Validate the Bot API endpoint
    ///
    /// # Validation Rules
    /// - Must be an absolute `http` or `https` URL with a host
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api_base_url).map_err(|e| {
            ConfigError::validation(
                "telegram.api_base_url",
                format!("Invalid URL '{}': {e}", self.api_base_url),
            )
        })?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::validation(
                "telegram.api_base_url",
                format!(
                    "Expected an http(s) URL with a host, got '{}'",
                    self.api_base_url
                ),
            ));
        }

        Ok(())
    }
}

impl HttpConfig {
    /// Validate HTTP client settings
    ///
    /// # Validation Rules
    /// - Connect timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout_secs",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }
        Ok(())
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.file.format",
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level",
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        self.file.validate()
    }
}

impl Settings {
    /// Validate all configuration settings, returning the first failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.telegram.validate()?;
        self.http.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: ConfigError) -> String {
        match err {
            ConfigError::ValidationError { field, .. } => field,
            other => panic!("Expected ValidationError, got {other:?}"),
        }
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_api_base_url_variants() {
        for url in [
            "https://api.telegram.org",
            "http://127.0.0.1:8081",
            "https://proxy.example.com/telegram/",
        ] {
            let config = TelegramApiConfig {
                api_base_url: url.to_string(),
            };
            assert!(config.validate().is_ok(), "{url} should be accepted");
        }
    }

    #[test]
    fn test_api_base_url_rejected() {
        for url in ["", "api.telegram.org", "ftp://api.telegram.org", "file:///tmp"] {
            let config = TelegramApiConfig {
                api_base_url: url.to_string(),
            };
            let err = config.validate().unwrap_err();
            assert_eq!(field_of(err), "telegram.api_base_url", "{url}");
        }
    }

    #[test]
    fn test_zero_connect_timeout() {
        let config = HttpConfig {
            connect_timeout_secs: 0,
            request_timeout_secs: 0,
        };
        assert_eq!(
            field_of(config.validate().unwrap_err()),
            "http.connect_timeout_secs"
        );
    }

    #[test]
    fn test_zero_request_timeout_is_allowed() {
        let config = HttpConfig {
            connect_timeout_secs: 5,
            request_timeout_secs: 0,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_valid_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO"] {
            let settings = LoggerSettings {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(settings.validate().is_ok(), "{level} should be accepted");
        }
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_eq!(field_of(settings.validate().unwrap_err()), "logger.level");
    }

    #[test]
    fn test_logger_settings_file_enabled_empty_path() {
        let mut settings = LoggerSettings::default();
        settings.file.enabled = true;
        settings.file.path = "  ".to_string();
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.path"
        );
    }

    #[test]
    fn test_logger_settings_file_disabled_empty_path_ok() {
        let mut settings = LoggerSettings::default();
        settings.file.path = String::new();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let mut settings = LoggerSettings::default();
        settings.file.format = "yaml".to_string();
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "logger.file.format"
        );
    }

    #[test]
    fn test_settings_reports_first_failure() {
        let mut settings = Settings::default();
        settings.http.connect_timeout_secs = 0;
        settings.logger.level = "nope".to_string();
        assert_eq!(
            field_of(settings.validate().unwrap_err()),
            "http.connect_timeout_secs"
        );
    }
}
