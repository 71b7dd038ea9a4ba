use std::time::Duration;

use crate::config::settings::HttpConfig;
use crate::error::{AppError, AppResult};

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("notify-cli/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by all providers
///
/// # Features
/// - **Timeouts**: connect timeout always applies; the overall request
///   timeout is only set when `request_timeout_secs` is non-zero
/// - **Connection pooling**: a single client is reused for every provider
/// - **Security**: Rustls for TLS, no OpenSSL dependency
///
/// # Errors
/// `Configuration` if the TLS backend cannot be initialised
pub fn build_http_client(config: &HttpConfig) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(USER_AGENT);

    if config.request_timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
    }

    builder.build().map_err(|e| AppError::Configuration {
        key: "http".to_string(),
        source: anyhow::Error::from(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_initialization() {
        assert!(build_http_client(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn test_client_with_request_timeout() {
        let config = HttpConfig {
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("notify-cli/"));
    }
}
