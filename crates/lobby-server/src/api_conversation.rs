//! Conversation-log echo handler.

use axum::{
    body::Bytes,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Handler for `POST /api/save-conversation`.
///
/// Echoes the submitted transcript back verbatim; nothing is stored. The
/// `log` field is read without schema enforcement — messages are opaque —
/// so parse and shape failures land in a catch-all error response rather
/// than a validation error.
pub async fn save_conversation_handler(body: Bytes) -> Response {
    let data: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => return echo_error(format!("invalid JSON body: {}", e)),
    };

    let Value::Object(fields) = data else {
        return echo_error("request body must be a JSON object".to_string());
    };

    let log = match fields.get("log") {
        None => Vec::new(),
        Some(Value::Array(messages)) => messages.clone(),
        Some(_) => return echo_error("log must be an array of messages".to_string()),
    };

    tracing::info!(message_count = log.len(), "received conversation log");

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "conversation_log": log,
            "message": "Conversation saved successfully",
        })),
    )
        .into_response()
}

fn echo_error(message: String) -> Response {
    tracing::error!(error = %message, "failed to save conversation");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": message,
            "status": "error",
        })),
    )
        .into_response()
}
