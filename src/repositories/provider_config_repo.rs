//! Provider configuration repository.
//!
//! Stores one pretty-printed JSON document per provider at
//! `providers/<name>/secret.json`. The repository is schema-agnostic: it reads
//! and writes raw JSON, and typed validation happens in
//! [`crate::models::ProviderConfig`].

use std::fmt::Display;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;
use tokio::fs;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::ProviderName;
use crate::utils::DataPaths;

/// Provider configuration repository
#[derive(Debug, Clone)]
pub struct ProviderConfigRepository {
    paths: DataPaths,
}

impl ProviderConfigRepository {
    /// Creates a new ProviderConfigRepository rooted at `paths`.
    pub fn new(paths: DataPaths) -> Self {
        Self { paths }
    }

    /// Persists `config` for `provider`, replacing any previous value.
    ///
    /// The document is written to a sibling temp file and renamed into place,
    /// so readers never observe a partially written config.
    ///
    /// # Errors
    /// `ConfigWrite` on any filesystem fault, carrying the underlying message.
    pub async fn save_config(&self, provider: ProviderName, config: &JsonValue) -> AppResult<()> {
        let dir = self.paths.provider_dir(provider.as_str());
        let path = self.paths.provider_config_path(provider.as_str());
        let tmp_path = path.with_extension("json.tmp");

        let contents =
            serde_json::to_string_pretty(config).map_err(|e| write_error(provider, e))?;

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| write_error(provider, e))?;
        fs::write(&tmp_path, contents.as_bytes())
            .await
            .map_err(|e| write_error(provider, e))?;
        restrict_permissions(&tmp_path)
            .await
            .map_err(|e| write_error(provider, e))?;

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(write_error(provider, e));
        }

        debug!(provider = %provider, path = %path.display(), "Saved provider config");
        Ok(())
    }

    /// Returns the stored config for `provider` as untyped JSON.
    ///
    /// # Errors
    /// `ProviderNotConfigured` when the file is absent, unreadable, or not
    /// valid JSON.
    pub async fn get_config_raw(&self, provider: ProviderName) -> AppResult<JsonValue> {
        let path = self.paths.provider_config_path(provider.as_str());
        let not_configured = || AppError::ProviderNotConfigured {
            provider: provider.to_string(),
        };

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_configured()),
            Err(e) => {
                warn!(provider = %provider, path = %path.display(), error = %e, "Failed to read provider config");
                return Err(not_configured());
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            warn!(provider = %provider, path = %path.display(), error = %e, "Stored provider config is not valid JSON");
            not_configured()
        })
    }

    /// Whether a config file exists for `provider`
    pub async fn is_configured(&self, provider: ProviderName) -> bool {
        let path = self.paths.provider_config_path(provider.as_str());
        fs::try_exists(&path).await.unwrap_or(false)
    }

    /// Configured providers, in declaration order
    pub async fn list_configured(&self) -> Vec<ProviderName> {
        let mut configured = Vec::new();
        for &provider in ProviderName::ALL {
            if self.is_configured(provider).await {
                configured.push(provider);
            }
        }
        configured
    }
}

fn write_error(provider: ProviderName, error: impl Display) -> AppError {
    AppError::ConfigWrite {
        provider: provider.to_string(),
        message: error.to_string(),
    }
}

/// Credentials are readable by the owner only
#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
