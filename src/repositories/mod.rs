//! Repository layer for the on-disk stores.
//!
//! Both repositories own their files exclusively and are constructed from a
//! [`DataPaths`] value, so tests can point them at a temporary directory.

mod notification_log_repo;
mod provider_config_repo;

pub use notification_log_repo::NotificationLogRepository;
pub use provider_config_repo::ProviderConfigRepository;

use crate::utils::DataPaths;

/// Aggregates all repositories for convenient access.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub provider_configs: ProviderConfigRepository,
    pub notification_logs: NotificationLogRepository,
}

impl Repositories {
    /// Creates a new Repositories instance rooted at `paths`.
    pub fn new(paths: DataPaths) -> Self {
        Self {
            provider_configs: ProviderConfigRepository::new(paths.clone()),
            notification_logs: NotificationLogRepository::new(paths),
        }
    }
}
