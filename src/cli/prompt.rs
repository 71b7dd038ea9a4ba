//! Interactive prompts for `notify setup`
//!
//! The setup handler talks to a [`SetupPrompter`] so it can run against the
//! terminal or a scripted answer list.

use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::error::{AppError, AppResult};
use crate::models::ProviderName;

/// Answers the questions `notify setup` asks when options are missing
pub trait SetupPrompter {
    /// Pick one of `providers`
    fn select_provider(&mut self, providers: &[ProviderName]) -> AppResult<ProviderName>;

    /// Read the provider credential without echoing it
    fn credential(&mut self, provider: ProviderName) -> AppResult<String>;

    /// Read the optional default recipient; an empty answer means none
    fn default_recipient(&mut self, provider: ProviderName) -> AppResult<String>;
}

/// Terminal prompts backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl SetupPrompter for InquirePrompter {
    fn select_provider(&mut self, providers: &[ProviderName]) -> AppResult<ProviderName> {
        Select::new("Select a provider to configure:", providers.to_vec())
            .prompt()
            .map_err(prompt_error)
    }

    fn credential(&mut self, provider: ProviderName) -> AppResult<String> {
        let label = format!("{}:", provider.credential_label());
        Password::new(&label)
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .with_help_message(credential_help(provider))
            .prompt()
            .map_err(prompt_error)
    }

    fn default_recipient(&mut self, provider: ProviderName) -> AppResult<String> {
        Text::new(recipient_label(provider))
            .with_help_message(recipient_help(provider))
            .prompt()
            .map_err(prompt_error)
    }
}

fn credential_help(provider: ProviderName) -> &'static str {
    match provider {
        ProviderName::Telegram => "You can get one from @BotFather on Telegram",
    }
}

fn recipient_label(provider: ProviderName) -> &'static str {
    match provider {
        ProviderName::Telegram => "Default recipient chat ID:",
    }
}

fn recipient_help(provider: ProviderName) -> &'static str {
    match provider {
        ProviderName::Telegram => {
            "Optional, press Enter to skip. Start @getidsbot on Telegram to find your chat ID"
        }
    }
}

fn prompt_error(error: InquireError) -> AppError {
    match error {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            AppError::Cancelled
        }
        InquireError::NotTTY => AppError::validation(
            "setup",
            "No interactive terminal; pass --provider and --token instead",
        ),
        other => anyhow::Error::new(other)
            .context("Interactive prompt failed")
            .into(),
    }
}
