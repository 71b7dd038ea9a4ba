//! notify-cli library
//!
//! Core modules for the `notify` command-line tool: provider configuration
//! and notification history stores, provider backends, and the CLI layer.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
