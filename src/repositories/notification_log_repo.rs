//! Notification log repository.
//!
//! Append-only JSON Lines history at `<base>/logs.jsonl`. Entries are only
//! ever appended or removed all at once; there is no in-place edit.

use std::io::ErrorKind;

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::LogEntry;
use crate::utils::DataPaths;

/// Notification log repository
#[derive(Debug, Clone)]
pub struct NotificationLogRepository {
    paths: DataPaths,
}

impl NotificationLogRepository {
    /// Creates a new NotificationLogRepository rooted at `paths`.
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Appends one entry as a single JSON line
    ///
    /// # Errors
    /// `LogWrite` on any filesystem fault.
    pub async fn add_log(&self, entry: &LogEntry) -> AppResult<()> {
        let path = self.paths.logs_path();
        let write_error = |e: &dyn std::fmt::Display| AppError::LogWrite {
            message: format!("Failed to write log: {e}"),
        };

        fs::create_dir_all(self.paths.base_dir())
            .await
            .map_err(|e| write_error(&e))?;

        let mut line = serde_json::to_string(entry).map_err(|e| write_error(&e))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| write_error(&e))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| write_error(&e))?;
        file.flush().await.map_err(|e| write_error(&e))?;

        debug!(provider = %entry.provider, "Appended notification log entry");
        Ok(())
    }

    /// Stamps the current time and appends the entry.
    ///
    /// # Returns
    /// The entry as written
    pub async fn log_notification(
        &self,
        provider: &str,
        recipient: &str,
        message: &str,
    ) -> AppResult<LogEntry> {
        let entry = LogEntry::now(provider, recipient, message);
        self.add_log(&entry).await?;
        Ok(entry)
    }

    /// Reads the history, oldest first.
    ///
    /// When `provider` is given (and non-empty) only entries whose provider
    /// matches case-insensitively are returned. A missing log file is an empty
    /// history.
    ///
    /// # Errors
    /// `LogRead` if the file cannot be read or any non-empty line is not a
    /// valid entry. One bad line fails the whole read.
    pub async fn get_logs(&self, provider: Option<&str>) -> AppResult<Vec<LogEntry>> {
        let path = self.paths.logs_path();
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::LogRead {
                    message: format!("Failed to read logs: {e}"),
                });
            }
        };

        let filter = provider.filter(|p| !p.is_empty());
        let mut entries = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(line).map_err(|e| AppError::LogRead {
                message: format!("Failed to read logs: line {}: {e}", index + 1),
            })?;

            if filter.is_none_or(|p| entry.matches_provider(p)) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Deletes the whole history. Clearing an absent log is a no-op.
    ///
    /// # Errors
    /// `LogWrite` if the file exists but cannot be removed.
    pub async fn clear_logs(&self) -> AppResult<()> {
        match fs::remove_file(self.paths.logs_path()).await {
            Ok(()) => {
                debug!("Cleared notification log");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::LogWrite {
                message: format!("Failed to clear logs: {e}"),
            }),
        }
    }
}
