//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::build;
use crate::models::ProviderName;

/// Send notifications when you are away from the keyboard
#[derive(Parser, Debug)]
#[command(name = "notify")]
#[command(about = "Send notifications when you are away from the keyboard")]
#[command(long_about = "
notify sends short messages through notification providers (currently
Telegram) and keeps a local history of everything it delivered.

EXAMPLES:
    # Configure a provider interactively
    notify setup

    # Configure Telegram without prompts
    notify setup --provider telegram --token 123456:ABC --recipient 987654

    # Send to the default recipient
    notify telegram \"Build finished\"

    # Send to a specific chat
    notify telegram 987654 Deploy is done

    # Show the history for one provider
    notify log telegram

Provider credentials and the history live under ~/.notify-cli unless
--data-dir or NOTIFY_HOME points elsewhere.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory holding provider configs, the history and config.toml
    ///
    /// Defaults to ~/.notify-cli. Created on first use.
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = "NOTIFY_HOME",
        value_parser = super::validation::validate_data_dir
    )]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    ///
    /// Raises the log level to debug. Diagnostics go to stderr.
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure a notification provider
    ///
    /// Prompts for anything not given as an option. The credential is checked
    /// against the provider before it is saved; a rejected credential is
    /// never written.
    ///
    /// Examples:
    ///   notify setup
    ///   notify setup --provider telegram --token 123456:ABC
    Setup {
        /// Provider to configure
        #[arg(short, long, value_name = "PROVIDER", value_parser = super::validation::validate_provider_name)]
        provider: Option<ProviderName>,

        /// Provider credential (Telegram: bot token)
        ///
        /// Prefer the masked prompt; values given here end up in shell history.
        #[arg(short, long, value_name = "TOKEN")]
        token: Option<String>,

        /// Default recipient (Telegram: chat ID)
        ///
        /// An empty value means no default recipient.
        #[arg(short, long, value_name = "RECIPIENT")]
        recipient: Option<String>,
    },

    /// Send a message via Telegram
    ///
    /// With one argument the message goes to the configured default
    /// recipient. With more, the first argument is the recipient and the rest
    /// are joined with spaces into the message. Use `--` before a message
    /// that starts with a dash.
    ///
    /// Examples:
    ///   notify telegram "Build finished"
    ///   notify telegram 987654 Deploy is done
    Telegram {
        /// [RECIPIENT] MESSAGE...
        #[arg(required = true, num_args = 1.., value_name = "ARGS")]
        args: Vec<String>,
    },

    /// View notification history
    ///
    /// Examples:
    ///   notify log
    ///   notify log telegram
    ///   notify log --clear
    Log {
        /// Only show entries for this provider (case-insensitive)
        #[arg(value_name = "PROVIDER")]
        provider: Option<String>,

        /// Delete the whole history instead of showing it
        #[arg(long, conflicts_with = "provider")]
        clear: bool,
    },

    /// List providers and whether they are configured
    Providers,
}
