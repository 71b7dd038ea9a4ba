//! Notification service for business logic.
//!
//! Composes the config store, the provider backends and the log store:
//! credentials are verified before they are saved, configs are validated
//! before every send, and only confirmed deliveries are logged.

use super::provider::NotificationProvider;
use super::telegram_provider::TelegramProvider;
use crate::error::{AppError, AppResult};
use crate::models::{LogEntry, ProviderConfig, ProviderName, TelegramConfig};
use crate::repositories::{NotificationLogRepository, ProviderConfigRepository, Repositories};
use tracing::{debug, info};

/// Outcome of a successful provider setup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSetup {
    pub provider: ProviderName,
    pub default_recipient: Option<String>,
}

/// Notification service handling provider setup, delivery and history
#[derive(Debug, Clone)]
pub struct NotificationService {
    config_repo: ProviderConfigRepository,
    log_repo: NotificationLogRepository,
    telegram: TelegramProvider,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `repos` - Config and log repositories
    /// * `telegram` - Telegram backend
    pub fn new(repos: Repositories, telegram: TelegramProvider) -> Self {
        Self {
            config_repo: repos.provider_configs,
            log_repo: repos.notification_logs,
            telegram,
        }
    }

    pub fn provider_configs(&self) -> &ProviderConfigRepository {
        &self.config_repo
    }

    pub fn notification_logs(&self) -> &NotificationLogRepository {
        &self.log_repo
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Reads and validates the stored config of `C::PROVIDER`
    ///
    /// # Errors
    /// `ProviderNotConfigured` if nothing usable is stored,
    /// `ProviderConfigInvalid` if the stored document fails the schema.
    pub async fn load_config<C: ProviderConfig>(&self) -> AppResult<C> {
        let raw = self.config_repo.get_config_raw(C::PROVIDER).await?;
        C::from_json(&raw)
    }

    pub async fn telegram_config(&self) -> AppResult<TelegramConfig> {
        self.load_config().await
    }

    /// Every known provider with its configured flag
    pub async fn provider_status(&self) -> Vec<(ProviderName, bool)> {
        let configured = self.config_repo.list_configured().await;
        ProviderName::ALL
            .iter()
            .map(|&p| (p, configured.contains(&p)))
            .collect()
    }

    /// Checks a credential against the provider before it is persisted.
    ///
    /// # Returns
    /// The trimmed credential
    ///
    /// # Errors
    /// `Validation` for a blank credential, `Send` if the backend rejects it
    pub async fn verify_credential(
        &self,
        provider: ProviderName,
        credential: &str,
    ) -> AppResult<String> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(AppError::validation(
                provider.credential_label(),
                format!("{} is required", provider.credential_label()),
            ));
        }

        match provider {
            ProviderName::Telegram => self.telegram.test_connection(credential).await?,
        }

        debug!(provider = %provider, "Credential verified");
        Ok(credential.to_string())
    }

    /// Stores a credential that has already been verified
    pub async fn save_credential(
        &self,
        provider: ProviderName,
        credential: &str,
        default_recipient: Option<&str>,
    ) -> AppResult<ProviderSetup> {
        let (raw, default_recipient) = match provider {
            ProviderName::Telegram => {
                let config = TelegramConfig::new(credential, default_recipient);
                (config.to_json()?, config.default_recipient)
            }
        };

        self.config_repo.save_config(provider, &raw).await?;
        info!(provider = %provider, "Provider configured");

        Ok(ProviderSetup {
            provider,
            default_recipient,
        })
    }

    /// Verifies then stores a credential. Nothing is written if verification fails.
    pub async fn configure(
        &self,
        provider: ProviderName,
        credential: &str,
        default_recipient: Option<&str>,
    ) -> AppResult<ProviderSetup> {
        let credential = self.verify_credential(provider, credential).await?;
        self.save_credential(provider, &credential, default_recipient)
            .await
    }

    // ========================================================================
    // Message Sending
    // ========================================================================

    /// Sends a message and records it in the history.
    ///
    /// `recipient` overrides the provider's default recipient.
    ///
    /// # Returns
    /// The log entry written for this delivery
    ///
    /// # Errors
    /// Config errors, `MissingRecipient`, `Send` (nothing logged), or
    /// `LogWrite` (message was delivered but not recorded)
    pub async fn send(
        &self,
        provider: ProviderName,
        recipient: Option<&str>,
        message: &str,
    ) -> AppResult<LogEntry> {
        match provider {
            ProviderName::Telegram => self.send_with(&self.telegram, recipient, message).await,
        }
    }

    /// The recipient a send would use: `recipient` when non-empty, otherwise
    /// the provider's default recipient.
    ///
    /// # Errors
    /// Config errors, or `MissingRecipient` when neither is set
    pub async fn resolve_recipient(
        &self,
        provider: ProviderName,
        recipient: Option<&str>,
    ) -> AppResult<String> {
        match provider {
            ProviderName::Telegram => {
                let config: TelegramConfig = self.load_config().await?;
                pick_recipient(provider, recipient, &config)
            }
        }
    }

    async fn send_with<P: NotificationProvider>(
        &self,
        backend: &P,
        recipient: Option<&str>,
        message: &str,
    ) -> AppResult<LogEntry> {
        let config: P::Config = self.load_config().await?;
        let recipient = pick_recipient(backend.name(), recipient, &config)?;

        backend.send_message(&config, &recipient, message).await?;

        self.log_repo
            .log_notification(backend.name().as_str(), &recipient, message)
            .await
    }

    // ========================================================================
    // Log Queries
    // ========================================================================

    pub async fn history(&self, provider: Option<&str>) -> AppResult<Vec<LogEntry>> {
        self.log_repo.get_logs(provider).await
    }

    pub async fn clear_history(&self) -> AppResult<()> {
        self.log_repo.clear_logs().await
    }
}

fn pick_recipient<C: ProviderConfig>(
    provider: ProviderName,
    recipient: Option<&str>,
    config: &C,
) -> AppResult<String> {
    recipient
        .filter(|r| !r.is_empty())
        .or_else(|| config.default_recipient())
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::MissingRecipient {
            provider: provider.to_string(),
        })
}
