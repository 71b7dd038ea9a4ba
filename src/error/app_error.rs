use thiserror::Error;

/// Application-wide error type.
///
/// Every failure that crosses the store, provider, or orchestration boundary is
/// one of these variants, so the CLI layer can map each kind to a distinct,
/// actionable message without string matching.
#[derive(Error, Debug)]
pub enum AppError {
    /// The provider has no stored configuration (or it could not be read)
    #[error("Provider '{provider}' is not configured")]
    ProviderNotConfigured { provider: String },

    /// A stored configuration exists but does not match the provider schema
    #[error("Invalid configuration for provider '{provider}': {message}")]
    ProviderConfigInvalid { provider: String, message: String },

    /// Filesystem fault while persisting a provider configuration
    #[error("Failed to save config for provider '{provider}': {message}")]
    ConfigWrite { provider: String, message: String },

    /// Filesystem fault while appending to or clearing the notification log
    #[error("{message}")]
    LogWrite { message: String },

    /// Filesystem or parse fault while reading the notification log
    #[error("{message}")]
    LogRead { message: String },

    /// Transport fault or remote rejection during delivery or credential checks
    #[error("{provider}: {message}")]
    Send { provider: String, message: String },

    /// The provider refused a credential during setup; nothing was saved
    #[error("Invalid {provider} credential: {message}")]
    CredentialRejected { provider: String, message: String },

    /// The user aborted an interactive prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// No recipient was given and the provider has no default recipient
    #[error("No recipient specified and no default recipient configured for '{provider}'")]
    MissingRecipient { provider: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn send(provider: impl ToString, message: impl Into<String>) -> Self {
        AppError::Send {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Internal {
            source: anyhow::Error::new(error).context("Failed to write output"),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_error_message() {
        let err = AppError::send("telegram", "Unauthorized");
        assert_eq!(err.to_string(), "telegram: Unauthorized");
    }

    #[test]
    fn test_not_configured_message() {
        let err = AppError::ProviderNotConfigured {
            provider: "telegram".to_string(),
        };
        assert_eq!(err.to_string(), "Provider 'telegram' is not configured");
    }

    #[test]
    fn test_credential_rejected_message() {
        let err = AppError::CredentialRejected {
            provider: "telegram".to_string(),
            message: "Unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid telegram credential: Unauthorized");
    }

    #[test]
    fn test_anyhow_converts_to_internal() {
        let err: AppError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
