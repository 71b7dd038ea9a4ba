//! Configuration management module for notify-cli
//!
//! Settings come from two optional layers on top of built-in defaults:
//!
//! # Configuration Priority (lowest to highest)
//! 1. Built-in defaults
//! 2. `<data dir>/config.toml`
//! 3. `NOTIFY_*` environment variables (`NOTIFY_HTTP__CONNECT_TIMEOUT_SECS=5`)
//!
//! Provider credentials are not settings; they live in the provider config
//! store.

pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{HttpConfig, LoggerSettings, Settings, TelegramApiConfig};
