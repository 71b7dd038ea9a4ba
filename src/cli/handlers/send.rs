//! Send command handler

use std::io::Write;

use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::models::ProviderName;
use crate::services::NotificationService;

/// Split positional arguments into an optional recipient and the message.
///
/// One argument is the message alone. With more, the first is the recipient
/// and the rest are joined with single spaces.
pub fn split_recipient_and_message(args: &[String]) -> AppResult<(Option<&str>, String)> {
    match args {
        [] => Err(AppError::validation(
            "message",
            "Missing required argument: message",
        )),
        [message] => Ok((None, message.clone())),
        [recipient, rest @ ..] => Ok((Some(recipient.as_str()), rest.join(" "))),
    }
}

/// Handler for provider send commands (`notify telegram ...`)
pub struct SendCommandHandler<'a> {
    service: &'a NotificationService,
    provider: ProviderName,
}

impl<'a> SendCommandHandler<'a> {
    pub fn new(service: &'a NotificationService, provider: ProviderName) -> Self {
        Self { service, provider }
    }

    /// Send the message described by `args`
    ///
    /// A delivered message whose history entry cannot be written is still a
    /// success; the failure is reported as a warning.
    pub async fn execute(&self, args: &[String], out: &mut dyn Write) -> AppResult<()> {
        let (recipient, message) = split_recipient_and_message(args)?;
        let recipient = self
            .service
            .resolve_recipient(self.provider, recipient)
            .await?;

        writeln!(out, "📤 Sending message to {recipient}...")?;
        out.flush()?;

        match self
            .service
            .send(self.provider, Some(&recipient), &message)
            .await
        {
            Ok(entry) => {
                writeln!(out, "✅ Message sent successfully to {}!", entry.recipient)?;
                Ok(())
            }
            Err(AppError::LogWrite { message }) => {
                warn!(provider = %self.provider, error = %message, "Delivered message was not logged");
                writeln!(out, "✅ Message sent successfully!")?;
                writeln!(
                    out,
                    "⚠️  The message was delivered but could not be recorded: {message}"
                )?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
