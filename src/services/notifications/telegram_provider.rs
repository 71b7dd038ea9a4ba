//! Telegram notification provider implementation.
//!
//! Delivers messages through the Telegram Bot API
//! (`POST /bot<token>/sendMessage`) and validates tokens with
//! `GET /bot<token>/getMe`.
//!
//! Bot API Reference: https://core.telegram.org/bots/api

use std::error::Error as StdError;

use super::provider::NotificationProvider;
use crate::error::{AppError, AppResult};
use crate::models::{ProviderName, TelegramConfig};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value as JsonValue, json};
use tracing::{debug, info, warn};

/// Public Bot API endpoint
pub const TELEGRAM_API_BASE_URL: &str = "https://api.telegram.org";

const SEND_FALLBACK_REASON: &str = "Unknown Telegram API error";
const AUTH_FALLBACK_REASON: &str = "Authentication failed";

/// Telegram notification provider
///
/// # Example
/// ```ignore
/// let provider = TelegramProvider::new(reqwest::Client::new(), TELEGRAM_API_BASE_URL);
/// provider.test_connection("123456:ABC-DEF").await?;
/// provider.send_message(&config, "987654321", "Build finished").await?;
/// ```
#[derive(Debug, Clone)]
pub struct TelegramProvider {
    client: reqwest::Client,
    api_base_url: String,
}

/// Why a Bot API reply was not a success
#[derive(Debug, PartialEq, Eq)]
enum ReplyError {
    /// Valid JSON with a falsy `ok`; carries the reason to report
    Rejected(String),
    /// Body is not a JSON object
    Malformed,
}

impl TelegramProvider {
    /// Creates a new Telegram provider
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `api_base_url` - Bot API root, normally [`TELEGRAM_API_BASE_URL`]
    pub fn new(client: reqwest::Client, api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            api_base_url,
        }
    }

    /// `<base>/bot<token>/<method>`
    fn method_url(&self, bot_token: &str, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base_url, bot_token, method)
    }

    fn build_request_body(recipient: &str, message: &str) -> JsonValue {
        json!({
            "chat_id": recipient,
            "text": message,
        })
    }

    /// Interprets a Bot API reply: a truthy `ok` means success, otherwise the
    /// `description` field (or `fallback`) is the failure reason.
    fn interpret_reply(body: &str, fallback: &str) -> Result<(), ReplyError> {
        let reply: JsonValue = serde_json::from_str(body).map_err(|_| ReplyError::Malformed)?;
        if reply.is_null() {
            return Err(ReplyError::Malformed);
        }

        if is_truthy(reply.get("ok")) {
            return Ok(());
        }

        let reason = reply
            .get("description")
            .and_then(JsonValue::as_str)
            .filter(|d| !d.is_empty())
            .unwrap_or(fallback);
        Err(ReplyError::Rejected(reason.to_string()))
    }

    /// Transport faults, with the request URL stripped so the token never
    /// ends up in messages or logs
    fn transport_error(&self, error: reqwest::Error) -> AppError {
        AppError::send(self.name(), error_chain(&error.without_url()))
    }
}

#[async_trait]
impl NotificationProvider for TelegramProvider {
    type Config = TelegramConfig;

    fn name(&self) -> ProviderName {
        ProviderName::Telegram
    }

    async fn send_message(
        &self,
        config: &TelegramConfig,
        recipient: &str,
        message: &str,
    ) -> AppResult<()> {
        let url = self.method_url(&config.bot_token, "sendMessage");
        debug!(recipient, "Sending Telegram message");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .json(&Self::build_request_body(recipient, message))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        match Self::interpret_reply(&body, SEND_FALLBACK_REASON) {
            Ok(()) => {
                info!(recipient, "Telegram message delivered");
                Ok(())
            }
            Err(ReplyError::Rejected(reason)) => {
                warn!(%status, recipient, reason = %reason, "Telegram rejected message");
                Err(AppError::send(self.name(), reason))
            }
            Err(ReplyError::Malformed) => {
                warn!(%status, "Telegram returned a non-JSON reply");
                Err(AppError::send(
                    self.name(),
                    format!("Invalid response: {body}"),
                ))
            }
        }
    }

    async fn test_connection(&self, credential: &str) -> AppResult<()> {
        let url = self.method_url(credential.trim(), "getMe");
        debug!("Validating Telegram bot token");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        match Self::interpret_reply(&body, AUTH_FALLBACK_REASON) {
            Ok(()) => Ok(()),
            Err(ReplyError::Rejected(reason)) => Err(AppError::send(self.name(), reason)),
            Err(ReplyError::Malformed) => Err(AppError::send(
                self.name(),
                "Invalid response from Telegram API",
            )),
        }
    }
}

/// JavaScript-style truthiness, which is how the Bot API `ok` flag is read
fn is_truthy(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Array(_) | JsonValue::Object(_)) => true,
    }
}

/// `outer: inner: root` rendering of an error and its sources
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
