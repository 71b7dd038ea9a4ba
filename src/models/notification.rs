//! Notification models.
//!
//! This module provides the provider identity, the typed provider
//! configurations layered on top of the raw config store, and the
//! notification log entry.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::error::{AppError, AppResult};

// ============================================================================
// Provider identity
// ============================================================================

/// Known notification providers.
///
/// Each name maps to exactly one directory under `providers/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderName {
    Telegram,
}

impl ProviderName {
    /// All providers, in declaration order
    pub const ALL: &'static [ProviderName] = &[ProviderName::Telegram];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderName::Telegram => "telegram",
        }
    }

    /// Human readable name used in prompts and messages
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderName::Telegram => "Telegram",
        }
    }

    /// Name of the secret requested during setup
    pub fn credential_label(&self) -> &'static str {
        match self {
            ProviderName::Telegram => "Bot Token",
        }
    }
}

impl FromStr for ProviderName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderName::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = ProviderName::ALL.iter().map(|p| p.as_str()).collect();
                AppError::validation(
                    "provider",
                    format!(
                        "Unknown provider '{}'. Available providers: {}",
                        s,
                        valid.join(", ")
                    ),
                )
            })
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Provider configuration
// ============================================================================

/// Typed schema of a provider's stored configuration.
///
/// The config store only deals in raw JSON; each provider decodes and
/// validates its own schema through [`ProviderConfig::from_json`].
pub trait ProviderConfig: Serialize + DeserializeOwned + Validate + Send + Sync {
    /// Provider this schema belongs to
    const PROVIDER: ProviderName;

    /// Recipient used when the caller does not name one
    fn default_recipient(&self) -> Option<&str>;

    /// Decode and validate a raw config value
    ///
    /// # Errors
    /// `ProviderConfigInvalid` when a field is missing, has the wrong type,
    /// or fails validation.
    fn from_json(raw: &JsonValue) -> AppResult<Self> {
        let config: Self =
            serde_json::from_value(raw.clone()).map_err(|e| AppError::ProviderConfigInvalid {
                provider: Self::PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        config
            .validate()
            .map_err(|e| AppError::ProviderConfigInvalid {
                provider: Self::PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        Ok(config)
    }

    /// Encode for the config store
    fn to_json(&self) -> AppResult<JsonValue> {
        serde_json::to_value(self).map_err(|e| AppError::ConfigWrite {
            provider: Self::PROVIDER.to_string(),
            message: e.to_string(),
        })
    }
}

/// Telegram bot credentials as stored in `providers/telegram/secret.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TelegramConfig {
    #[validate(length(min = 1, message = "botToken must not be empty"))]
    pub bot_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_recipient: Option<String>,
}

impl TelegramConfig {
    /// Build a config from user input, trimming both values.
    ///
    /// A blank recipient is treated as absent rather than stored as "".
    pub fn new(bot_token: &str, default_recipient: Option<&str>) -> Self {
        Self {
            bot_token: bot_token.trim().to_string(),
            default_recipient: default_recipient
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
        }
    }
}

impl ProviderConfig for TelegramConfig {
    const PROVIDER: ProviderName = ProviderName::Telegram;

    fn default_recipient(&self) -> Option<&str> {
        self.default_recipient.as_deref()
    }
}

// ============================================================================
// Notification log
// ============================================================================

/// One delivered notification, stored as a single line of `logs.jsonl`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub provider: String,
    pub recipient: String,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn now(
        provider: impl Into<String>,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Timestamp::now(),
            provider: provider.into(),
            recipient: recipient.into(),
            message: message.into(),
        }
    }

    /// Case-insensitive provider match
    pub fn matches_provider(&self, provider: &str) -> bool {
        self.provider.to_lowercase() == provider.to_lowercase()
    }
}
