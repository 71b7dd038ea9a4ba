use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use notify_cli::cli::{self, Cli, execute_command, report_error};
use notify_cli::external::build_http_client;
use notify_cli::repositories::Repositories;
use notify_cli::services::NotificationService;
use notify_cli::services::notifications::TelegramProvider;
use notify_cli::utils::DataPaths;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let service = match bootstrap(&cli) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("❌ {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match execute_command(&cli, &service, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = stdout.flush();
            debug!(error = ?e, "Command failed");
            report_error(&e, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Resolve the data directory, load settings, start logging and wire the service
fn bootstrap(cli: &Cli) -> anyhow::Result<NotificationService> {
    let paths = DataPaths::resolve(cli.data_dir.clone()).context(
        "Could not determine the home directory; pass --data-dir or set NOTIFY_HOME",
    )?;

    let settings = cli::load_settings(&paths).with_context(|| {
        format!(
            "Failed to load settings (file: {})",
            paths.settings_path().display()
        )
    })?;

    // Logging is best effort; a broken log file must not stop a notification
    if let Err(e) = cli::init_logger_from_settings(cli, &settings, &paths) {
        eprintln!("⚠️  Logging disabled: {e:#}");
    }
    debug!(data_dir = %paths.base_dir().display(), version = notify_cli::pkg_version(), "Starting notify");

    let client = build_http_client(&settings.http)?;
    let telegram = TelegramProvider::new(client, settings.telegram.api_base_url.clone());

    Ok(NotificationService::new(Repositories::new(paths), telegram))
}
