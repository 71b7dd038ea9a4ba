//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.
//! Handlers write user-facing output to the writer they are given; errors
//! are returned to the executor, which reports them.

pub mod log;
pub mod providers;
pub mod send;
pub mod setup;

pub use log::LogCommandHandler;
pub use providers::ProvidersCommandHandler;
pub use send::SendCommandHandler;
pub use setup::{SetupArgs, SetupCommandHandler};

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use crate::repositories::Repositories;
    use crate::services::NotificationService;
    use crate::services::notifications::TelegramProvider;
    use crate::services::notifications::stub_api::StubBotApi;
    use crate::utils::DataPaths;

    pub struct Harness {
        pub dir: TempDir,
        pub api: StubBotApi,
        pub service: NotificationService,
        pub out: Vec<u8>,
    }

    impl Harness {
        pub async fn new() -> Self {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let api = StubBotApi::spawn().await;
            let paths = DataPaths::new(dir.path().join(".notify-cli"));
            let telegram = TelegramProvider::new(reqwest::Client::new(), api.base_url());
            let service = NotificationService::new(Repositories::new(paths), telegram);
            Self {
                dir,
                api,
                service,
                out: Vec::new(),
            }
        }

        pub fn output(&self) -> String {
            String::from_utf8_lossy(&self.out).into_owned()
        }
    }
}
