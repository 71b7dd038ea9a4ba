mod notification;

pub use notification::{LogEntry, ProviderConfig, ProviderName, TelegramConfig};
