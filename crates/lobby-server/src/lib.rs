//! Lobby server library logic.
//!
//! The receptionist surface is four routes: the interface document, the
//! favicon, conversation-token issuance, transcript echo, and a health
//! report. Handlers are stateless and request-scoped; the only shared state
//! is the immutable configuration and the upstream client built at startup.

pub mod api_conversation;
pub mod api_static;
pub mod api_token;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use config::Config;
use lobby_voice::ConvaiClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
///
/// Immutable after construction. Handlers receive it by reference through
/// `Extension(Arc<_>)` rather than reading process-wide globals.
pub struct AppState {
    /// Server configuration.
    pub config: Config,
    /// Upstream client, `None` when construction failed at startup. The
    /// health endpoint reports construction state, not upstream reachability.
    pub client: Option<ConvaiClient>,
}

impl AppState {
    /// Builds the state, constructing the upstream client from config. A
    /// construction failure is logged and leaves the server running with
    /// token issuance disabled.
    pub fn new(config: Config) -> Self {
        let client = match ConvaiClient::new(config.elevenlabs.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "failed to initialize ElevenLabs client");
                None
            }
        };
        Self { config, client }
    }

    /// Whether the upstream client came up at startup with a key in hand.
    pub fn client_initialized(&self) -> bool {
        self.client.as_ref().is_some_and(ConvaiClient::has_api_key)
    }
}

/// Maximum request body size (2 MiB). Protects against OOM from oversized payloads.
const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Health check handler.
///
/// Always succeeds; never performs an outbound call. `elevenlabs_client`
/// reflects whether the client object was constructed at startup.
async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "agent_id": state.config.elevenlabs.agent_id,
        "elevenlabs_client": if state.client_initialized() {
            "initialized"
        } else {
            "not initialized"
        },
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        .route("/", get(api_static::index_handler))
        .route("/favicon.ico", get(api_static::favicon_handler))
        .route(
            "/api/conversation-token",
            post(api_token::conversation_token_handler),
        )
        .route(
            "/api/save-conversation",
            post(api_conversation::save_conversation_handler),
        )
        .route("/api/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
