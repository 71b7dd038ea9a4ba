//! Core notification provider trait.
//!
//! A provider is a delivery backend with its own credential schema. Adding a
//! backend means implementing this trait, adding a [`ProviderName`] variant,
//! and registering it in [`super::NotificationService`]; the stores are not
//! touched.

use crate::error::AppResult;
use crate::models::{ProviderConfig, ProviderName};
use async_trait::async_trait;

/// Trait for notification providers (Telegram, and future backends)
///
/// Uses `async_trait` to support async methods.
/// All providers must be Send + Sync for use in async contexts.
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
///
/// pub struct PigeonProvider;
///
/// #[async_trait]
/// impl NotificationProvider for PigeonProvider {
///     type Config = PigeonConfig;
///
///     fn name(&self) -> ProviderName {
///         ProviderName::Pigeon
///     }
///
///     async fn send_message(&self, config: &PigeonConfig, recipient: &str, message: &str) -> AppResult<()> {
///         // Implementation here
///     }
///
///     async fn test_connection(&self, credential: &str) -> AppResult<()> {
///         // Implementation here
///     }
/// }
/// ```
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Stored configuration schema for this provider
    type Config: ProviderConfig;

    /// Returns the provider identity, used for routing and logging
    fn name(&self) -> ProviderName;

    /// Delivers one message.
    ///
    /// Either the downstream API accepts the message or the call fails; no
    /// retry is attempted.
    ///
    /// # Errors
    /// `Send` carrying the remote reason when available
    async fn send_message(
        &self,
        config: &Self::Config,
        recipient: &str,
        message: &str,
    ) -> AppResult<()>;

    /// Checks that a bare credential is accepted by the backend.
    ///
    /// Called during setup before anything is persisted.
    ///
    /// # Errors
    /// `Send` when the credential is rejected or the backend is unreachable
    async fn test_connection(&self, credential: &str) -> AppResult<()>;
}
