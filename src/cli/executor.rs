//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading, and turns failures into the
//! messages users see.

use std::io::Write;

use super::handlers::{
    LogCommandHandler, ProvidersCommandHandler, SendCommandHandler, SetupArgs,
    SetupCommandHandler,
};
use super::parser::{Cli, Commands};
use super::prompt::{InquirePrompter, SetupPrompter};
use crate::error::{AppError, AppResult};
use crate::models::ProviderName;
use crate::services::NotificationService;

/// Execute a CLI command against `service`, writing command output to `out`
pub async fn execute_command(
    cli: &Cli,
    service: &NotificationService,
    out: &mut dyn Write,
) -> AppResult<()> {
    execute_with_prompter(cli, service, &mut InquirePrompter, out).await
}

pub(crate) async fn execute_with_prompter(
    cli: &Cli,
    service: &NotificationService,
    prompter: &mut dyn SetupPrompter,
    out: &mut dyn Write,
) -> AppResult<()> {
    match &cli.command {
        None => print_overview(out),
        Some(Commands::Setup {
            provider,
            token,
            recipient,
        }) => {
            let args = SetupArgs {
                provider: *provider,
                token: token.as_deref(),
                recipient: recipient.as_deref(),
            };
            SetupCommandHandler::new(service)
                .execute(args, prompter, out)
                .await
                .map(|_| ())
        }
        Some(Commands::Telegram { args }) => {
            SendCommandHandler::new(service, ProviderName::Telegram)
                .execute(args, out)
                .await
        }
        Some(Commands::Log { provider, clear }) => {
            LogCommandHandler::new(service)
                .execute(provider.as_deref(), *clear, out)
                .await
        }
        Some(Commands::Providers) => ProvidersCommandHandler::new(service).execute(out).await,
    }
}

fn print_overview(out: &mut dyn Write) -> AppResult<()> {
    writeln!(out, "Notify CLI - Send notifications when AFK")?;
    writeln!(out)?;
    writeln!(out, "Available commands:")?;
    writeln!(out, "  setup      - Configure notification providers")?;
    writeln!(out, "  telegram   - Send a message via Telegram")?;
    writeln!(out, "  log        - View notification history")?;
    writeln!(out, "  providers  - List providers and their status")?;
    writeln!(out)?;
    writeln!(out, "Run 'notify <command> --help' for more information.")?;
    Ok(())
}

/// User-facing description of a failed command, one line per entry
pub fn describe_error(error: &AppError) -> Vec<String> {
    match error {
        AppError::ProviderNotConfigured { provider } => vec![
            format!("❌ {} provider is not configured.", display_name(provider)),
            "   Run 'notify setup' to configure it first.".to_string(),
        ],
        AppError::ProviderConfigInvalid { provider, message } => vec![
            format!("❌ Configuration error: {message}"),
            format!("   Run 'notify setup' to reconfigure {provider}."),
        ],
        AppError::ConfigWrite { message, .. } => {
            vec![format!("❌ Failed to save configuration: {message}")]
        }
        AppError::CredentialRejected { provider, message } => vec![
            format!("❌ Invalid {}: {message}", credential_label(provider)),
            "   Configuration was not saved.".to_string(),
        ],
        AppError::MissingRecipient { .. } => vec![
            "❌ No recipient specified and no default recipient configured.".to_string(),
            "   Either provide a recipient or set a default during setup.".to_string(),
        ],
        AppError::Send { message, .. } => vec![format!("❌ Failed to send message: {message}")],
        AppError::LogRead { message } | AppError::LogWrite { message } => {
            vec![format!("❌ {message}")]
        }
        AppError::Validation { reason, .. } => vec![format!("❌ {reason}")],
        AppError::Cancelled => vec!["Setup cancelled.".to_string()],
        AppError::Configuration { .. } | AppError::Internal { .. } => {
            vec![format!("❌ {}", error_chain(error))]
        }
    }
}

/// Write [`describe_error`] lines to `err_out`
pub fn report_error(error: &AppError, err_out: &mut dyn Write) {
    for line in describe_error(error) {
        let _ = writeln!(err_out, "{line}");
    }
}

fn display_name(provider: &str) -> String {
    provider
        .parse::<ProviderName>()
        .map(|p| p.display_name().to_string())
        .unwrap_or_else(|_| provider.to_string())
}

fn credential_label(provider: &str) -> String {
    provider
        .parse::<ProviderName>()
        .map(|p| p.credential_label().to_lowercase())
        .unwrap_or_else(|_| "credential".to_string())
}

fn error_chain(error: &AppError) -> String {
    let mut text = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        text.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handlers::test_support::Harness;
    use crate::cli::prompt::scripted::ScriptedPrompter;
    use crate::services::notifications::stub_api::GOOD_TOKEN;
    use clap::Parser;

    async fn run(h: &mut Harness, argv: &[&str], prompter: &mut ScriptedPrompter) -> AppResult<()> {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        execute_with_prompter(&cli, &h.service, prompter, &mut h.out).await
    }

    #[tokio::test]
    async fn test_no_command_prints_overview() {
        let mut h = Harness::new().await;
        run(&mut h, &["notify"], &mut ScriptedPrompter::default())
            .await
            .unwrap();
        assert!(h.output().contains("Available commands:"));
    }

    #[tokio::test]
    async fn test_setup_then_send_then_log() {
        let mut h = Harness::new().await;
        let mut prompter = ScriptedPrompter::default();

        run(
            &mut h,
            &["notify", "setup", "--provider", "telegram", "--token", GOOD_TOKEN, "--recipient", "42"],
            &mut prompter,
        )
        .await
        .unwrap();
        run(&mut h, &["notify", "telegram", "All tests passed"], &mut prompter)
            .await
            .unwrap();

        h.out.clear();
        run(&mut h, &["notify", "log", "telegram"], &mut prompter)
            .await
            .unwrap();

        let output = h.output();
        assert!(output.contains("To: 42"));
        assert!(output.contains("Message: All tests passed"));
        assert!(prompter.asked.is_empty());
    }

    #[tokio::test]
    async fn test_send_before_setup() {
        let mut h = Harness::new().await;
        let err = run(&mut h, &["notify", "telegram", "hi"], &mut ScriptedPrompter::default())
            .await
            .unwrap_err();

        assert_eq!(
            describe_error(&err),
            vec![
                "❌ Telegram provider is not configured.",
                "   Run 'notify setup' to configure it first.",
            ]
        );
    }

    #[test]
    fn test_describe_rejected_credential() {
        let err = AppError::CredentialRejected {
            provider: "telegram".to_string(),
            message: "Unauthorized".to_string(),
        };
        assert_eq!(
            describe_error(&err),
            vec!["❌ Invalid bot token: Unauthorized", "   Configuration was not saved."]
        );
    }

    #[test]
    fn test_describe_send_failure() {
        let err = AppError::send("telegram", "Forbidden: bot was blocked by the user");
        assert_eq!(
            describe_error(&err),
            vec!["❌ Failed to send message: Forbidden: bot was blocked by the user"]
        );
    }

    #[test]
    fn test_describe_internal_includes_cause() {
        let err: AppError = anyhow::anyhow!("disk on fire").context("Prompt failed").into();
        let lines = describe_error(&err);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Prompt failed"));
        assert!(lines[0].contains("disk on fire"));
    }

    #[test]
    fn test_report_error_writes_lines() {
        let mut err_out = Vec::new();
        report_error(&AppError::Cancelled, &mut err_out);
        assert_eq!(String::from_utf8(err_out).unwrap(), "Setup cancelled.\n");
    }
}
