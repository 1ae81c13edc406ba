//! Webhook endpoint for inbound platform events

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tracing::error;

use crate::bot::Bot;
use crate::dispatch::EventPayload;

const ACK_BODY: &str = r#"{"status":"ok"}"#;

/// Build a router forwarding every request, on any path, to the webhook
/// handler.
pub fn router(bot: Bot) -> Router {
    Router::new().fallback(handle).with_state(bot)
}

/// Handle one inbound webhook request.
///
/// The webhook contract never signals failure to the platform: every
/// request is acknowledged with 200. Non-POST requests get an empty body
/// and never reach the dispatcher; malformed POST bodies are logged and
/// swallowed.
pub async fn handle(State(bot): State<Bot>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return ([(header::CONTENT_TYPE, "application/json")], "").into_response();
    }

    match serde_json::from_slice::<EventPayload>(&body) {
        Ok(payload) => bot.handle_event(payload).await,
        Err(err) => error!(error = %err, "Failed to parse webhook body"),
    }

    ([(header::CONTENT_TYPE, "application/json")], ACK_BODY).into_response()
}
