//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::path::PathBuf;

use crate::models::ProviderName;

/// Validate a provider name against the known providers (case-insensitive)
pub fn validate_provider_name(name: &str) -> Result<ProviderName, String> {
    name.trim().parse::<ProviderName>().map_err(|_| {
        let known: Vec<&str> = ProviderName::ALL.iter().map(|p| p.as_str()).collect();
        format!(
            "Unknown provider '{}'. Available providers: {}",
            name,
            known.join(", ")
        )
    })
}

/// Validate that the data directory is usable
///
/// The directory does not have to exist yet; it is created on first write.
/// An existing path must be a directory.
pub fn validate_data_dir(path_str: &str) -> Result<PathBuf, String> {
    if path_str.trim().is_empty() {
        return Err("Data directory cannot be empty".to_string());
    }

    let path = PathBuf::from(path_str);
    if path.exists() && !path.is_dir() {
        return Err(format!("Data directory is not a directory: '{path_str}'"));
    }

    Ok(path)
}
