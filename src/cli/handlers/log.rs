//! Log command handler

use std::io::Write;

use jiff::tz::TimeZone;

use crate::error::AppResult;
use crate::models::LogEntry;
use crate::services::NotificationService;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handler for the log command
pub struct LogCommandHandler<'a> {
    service: &'a NotificationService,
}

impl<'a> LogCommandHandler<'a> {
    pub fn new(service: &'a NotificationService) -> Self {
        Self { service }
    }

    /// Print the history (optionally filtered) or clear it
    pub async fn execute(
        &self,
        provider: Option<&str>,
        clear: bool,
        out: &mut dyn Write,
    ) -> AppResult<()> {
        if clear {
            self.service.clear_history().await?;
            writeln!(out, "🗑️  Notification history cleared.")?;
            return Ok(());
        }

        let provider = provider.filter(|p| !p.is_empty());
        let entries = self.service.history(provider).await?;
        out.write_all(render_history(&entries, provider, &TimeZone::system()).as_bytes())?;
        Ok(())
    }
}

/// Human-readable history, timestamps shown in `tz`
pub fn render_history(entries: &[LogEntry], provider: Option<&str>, tz: &TimeZone) -> String {
    if entries.is_empty() {
        return match provider {
            Some(provider) => format!("📋 No notifications found for provider: {provider}\n"),
            None => "📋 No notifications logged yet.\n".to_string(),
        };
    }

    let mut text = match provider {
        Some(provider) => format!("📋 Notification history for {provider}:\n\n"),
        None => "📋 Notification history:\n\n".to_string(),
    };

    for entry in entries {
        let when = entry.timestamp.to_zoned(tz.clone()).strftime(TIMESTAMP_FORMAT);
        text.push_str(&format!("[{when}] [{}]\n", entry.provider));
        text.push_str(&format!("  To: {}\n", entry.recipient));
        text.push_str(&format!("  Message: {}\n\n", entry.message));
    }

    text.push_str(&format!("Total: {} notification(s)\n", entries.len()));
    text
}
