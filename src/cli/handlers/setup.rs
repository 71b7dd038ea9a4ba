//! Setup command handler
//!
//! Collects a provider credential, checks it against the provider and only
//! then stores it.

use std::io::Write;

use tracing::debug;

use crate::cli::prompt::SetupPrompter;
use crate::error::{AppError, AppResult};
use crate::models::ProviderName;
use crate::services::NotificationService;
use crate::services::notifications::notification_service::ProviderSetup;

/// Values given on the command line; anything missing is prompted for
#[derive(Debug, Default, Clone, Copy)]
pub struct SetupArgs<'a> {
    pub provider: Option<ProviderName>,
    pub token: Option<&'a str>,
    pub recipient: Option<&'a str>,
}

/// Handler for the setup command
pub struct SetupCommandHandler<'a> {
    service: &'a NotificationService,
}

impl<'a> SetupCommandHandler<'a> {
    pub fn new(service: &'a NotificationService) -> Self {
        Self { service }
    }

    /// Run the setup flow
    ///
    /// The default recipient is only asked for when the credential was
    /// prompted for too, so `--token` alone never blocks on a prompt.
    ///
    /// # Errors
    /// - `Validation` for a blank credential
    /// - `CredentialRejected` when the provider refuses it (nothing saved)
    /// - `Cancelled` when a prompt is aborted
    /// - `ConfigWrite` when the config cannot be stored
    pub async fn execute(
        &self,
        args: SetupArgs<'_>,
        prompter: &mut dyn SetupPrompter,
        out: &mut dyn Write,
    ) -> AppResult<ProviderSetup> {
        writeln!(out, "🔧 Notify CLI Setup\n")?;

        let provider = match args.provider {
            Some(provider) => provider,
            None => prompter.select_provider(ProviderName::ALL)?,
        };
        let label = provider.credential_label();

        writeln!(out, "📱 Setting up {} provider\n", provider.display_name())?;

        let interactive = args.token.is_none();
        let credential = match args.token {
            Some(token) => token.to_string(),
            None => prompter.credential(provider)?,
        };

        writeln!(out, "🔍 Validating {}...", label.to_lowercase())?;
        out.flush()?;

        let credential = self
            .service
            .verify_credential(provider, &credential)
            .await
            .map_err(|e| match e {
                AppError::Send { provider, message } => {
                    AppError::CredentialRejected { provider, message }
                }
                other => other,
            })?;

        writeln!(out, "✅ {label} validated successfully!")?;

        let recipient = match args.recipient {
            Some(recipient) => Some(recipient.to_string()),
            None if interactive => Some(prompter.default_recipient(provider)?),
            None => None,
        };

        let setup = self
            .service
            .save_credential(provider, &credential, recipient.as_deref())
            .await?;
        debug!(provider = %provider, has_default = setup.default_recipient.is_some(), "Setup finished");

        writeln!(
            out,
            "\n✅ {} provider configured successfully!",
            provider.display_name()
        )?;
        match &setup.default_recipient {
            Some(recipient) => writeln!(out, "   Default recipient: {recipient}")?,
            None => writeln!(
                out,
                "   No default recipient set (you'll need to specify one when sending)"
            )?,
        }

        Ok(setup)
    }
}
