//! Notification system with pluggable providers.
//!
//! The core trait `NotificationProvider` allows adding delivery backends
//! without touching the config or log stores.

mod provider;
mod telegram_provider;

#[cfg(test)]
pub(crate) mod stub_api;

pub mod notification_service;

pub use notification_service::NotificationService;
pub use provider::NotificationProvider;
pub use telegram_provider::{TELEGRAM_API_BASE_URL, TelegramProvider};
