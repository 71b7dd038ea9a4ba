//! In-process stand-in for the Telegram Bot API, bound to `127.0.0.1:0`.
//!
//! Token behaviour:
//! - `good-token`: accepted; `sendMessage` to chat `blocked` is rejected
//! - `silent-token`: rejected without a `description`
//! - `garbled-token`: replies with an HTML error page
//! - `list-token`: replies with a bare JSON array
//! - anything else: rejected as `Unauthorized`

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value as JsonValue, json};

pub const GOOD_TOKEN: &str = "good-token";

#[derive(Clone, Default)]
struct StubState {
    received: Arc<Mutex<Vec<JsonValue>>>,
}

pub struct StubBotApi {
    base_url: String,
    state: StubState,
}

impl StubBotApi {
    pub async fn spawn() -> Self {
        let state = StubState::default();
        let router = Router::new()
            .route("/{bot}/getMe", get(get_me))
            .route("/{bot}/sendMessage", post(send_message))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub Bot API");
        let addr = listener.local_addr().expect("Stub Bot API has no address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub Bot API stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request bodies accepted by `sendMessage`, in arrival order
    pub fn received(&self) -> Vec<JsonValue> {
        self.state.received.lock().unwrap().clone()
    }
}

fn token(bot: &str) -> &str {
    bot.strip_prefix("bot").unwrap_or(bot)
}

fn unauthorized_reply(token: &str) -> Option<Response> {
    match token {
        GOOD_TOKEN => None,
        "silent-token" => Some(Json(json!({ "ok": false })).into_response()),
        "list-token" => Some(Json(json!([])).into_response()),
        "garbled-token" => Some(
            (
                StatusCode::BAD_GATEWAY,
                "<html><body>502 Bad Gateway</body></html>",
            )
                .into_response(),
        ),
        _ => Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "ok": false, "error_code": 401, "description": "Unauthorized" })),
            )
                .into_response(),
        ),
    }
}

async fn get_me(Path(bot): Path<String>) -> Response {
    if let Some(reply) = unauthorized_reply(token(&bot)) {
        return reply;
    }
    Json(json!({
        "ok": true,
        "result": { "id": 1, "is_bot": true, "first_name": "Stub", "username": "stub_bot" }
    }))
    .into_response()
}

async fn send_message(
    State(state): State<StubState>,
    Path(bot): Path<String>,
    Json(body): Json<JsonValue>,
) -> Response {
    if let Some(reply) = unauthorized_reply(token(&bot)) {
        return reply;
    }

    if body["chat_id"] == "blocked" {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "ok": false,
                "error_code": 403,
                "description": "Forbidden: bot was blocked by the user"
            })),
        )
            .into_response();
    }

    state.received.lock().unwrap().push(body);
    Json(json!({ "ok": true, "result": { "message_id": 1 } })).into_response()
}
