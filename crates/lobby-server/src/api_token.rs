//! Conversation-token issuance handler.

use crate::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use lobby_voice::TokenError;
use serde_json::json;
use std::sync::Arc;

/// Handler for `POST /api/conversation-token`.
///
/// Called by the frontend to start a conversation. Every outcome carries a
/// structured JSON body with a `status` marker. Failures are not retried
/// here; the browser retries if it cares to.
pub async fn conversation_token_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let Some(client) = state.client.as_ref() else {
        return token_error_response(TokenError::Unexpected(
            "ElevenLabs client not initialized".to_string(),
        ));
    };

    match client.conversation_token().await {
        Ok(token) => (
            StatusCode::OK,
            Json(json!({
                "conversationToken": token,
                "agentId": client.agent_id(),
                "status": "success",
            })),
        )
            .into_response(),
        Err(err) => token_error_response(err),
    }
}

/// Maps each failure kind to its response payload. Every kind is a server
/// error to the caller; upstream status failures carry diagnostic details.
fn token_error_response(err: TokenError) -> Response {
    let body = match err {
        TokenError::MissingApiKey => json!({
            "error": "ELEVENLABS_API_KEY not configured",
            "status": "error",
        }),
        TokenError::UpstreamStatus { status, body } => json!({
            "error": "Failed to get conversation token from ElevenLabs",
            "status": "error",
            "details": {
                "status_code": status,
                "response": body,
            },
        }),
        TokenError::MissingToken => json!({
            "error": "Token missing in ElevenLabs response",
            "status": "error",
        }),
        TokenError::Network(_) => json!({
            "error": "Network error contacting ElevenLabs",
            "status": "error",
        }),
        TokenError::Unexpected(message) => json!({
            "error": message,
            "status": "error",
        }),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
