//! On-disk layout of the notify data directory.
//!
//! ```text
//! <base>/
//! ├── config.toml                  application settings (optional)
//! ├── logs.jsonl                   notification history
//! └── providers/<name>/secret.json provider credentials
//! ```
//!
//! `DataPaths` is a plain value: it performs no I/O and is passed into the
//! stores at construction time.

use std::path::{Path, PathBuf};

/// Directory created under the user's home directory
pub const DATA_DIR_NAME: &str = ".notify-cli";

const PROVIDERS_DIR: &str = "providers";
const PROVIDER_CONFIG_FILE: &str = "secret.json";
const LOGS_FILE: &str = "logs.jsonl";
const SETTINGS_FILE: &str = "config.toml";

/// Resolves every path the CLI reads or writes from a single base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    base: PathBuf,
}

impl DataPaths {
    /// Use `base` directly as the data directory
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// `<home>/.notify-cli`
    pub fn from_home_dir(home: &Path) -> Self {
        Self::new(home.join(DATA_DIR_NAME))
    }

    /// Prefer an explicit override, otherwise fall back to the user's home directory.
    ///
    /// Returns `None` only when no override is given and the home directory
    /// cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Option<Self> {
        match override_dir {
            Some(dir) => Some(Self::new(dir)),
            None => dirs::home_dir().map(|home| Self::from_home_dir(&home)),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn providers_dir(&self) -> PathBuf {
        self.base.join(PROVIDERS_DIR)
    }

    pub fn provider_dir(&self, name: &str) -> PathBuf {
        self.providers_dir().join(name)
    }

    pub fn provider_config_path(&self, name: &str) -> PathBuf {
        self.provider_dir(name).join(PROVIDER_CONFIG_FILE)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.base.join(LOGS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base.join(SETTINGS_FILE)
    }

    /// Resolve a path relative to the data directory; absolute paths are returned unchanged
    pub fn resolve_relative(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        PathBuf::from("/home/alice")
    }

    #[test]
    fn test_base_dir_in_home() {
        let paths = DataPaths::from_home_dir(&home());
        assert_eq!(paths.base_dir(), Path::new("/home/alice/.notify-cli"));
    }

    #[test]
    fn test_provider_paths() {
        let paths = DataPaths::from_home_dir(&home());
        assert_eq!(
            paths.providers_dir(),
            PathBuf::from("/home/alice/.notify-cli/providers")
        );
        assert_eq!(
            paths.provider_dir("telegram"),
            PathBuf::from("/home/alice/.notify-cli/providers/telegram")
        );
        assert_eq!(
            paths.provider_config_path("telegram"),
            PathBuf::from("/home/alice/.notify-cli/providers/telegram/secret.json")
        );
    }

    #[test]
    fn test_logs_and_settings_paths() {
        let paths = DataPaths::from_home_dir(&home());
        assert_eq!(
            paths.logs_path(),
            PathBuf::from("/home/alice/.notify-cli/logs.jsonl")
        );
        assert_eq!(
            paths.settings_path(),
            PathBuf::from("/home/alice/.notify-cli/config.toml")
        );
    }

    #[test]
    fn test_resolve_prefers_override() {
        let paths = DataPaths::resolve(Some(PathBuf::from("/tmp/notify"))).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/tmp/notify"));
    }

    #[test]
    fn test_resolve_relative() {
        let paths = DataPaths::new("/data");
        assert_eq!(
            paths.resolve_relative(Path::new("notify.log")),
            PathBuf::from("/data/notify.log")
        );
        assert_eq!(
            paths.resolve_relative(Path::new("/var/log/notify.log")),
            PathBuf::from("/var/log/notify.log")
        );
    }
}
