//! Interface document and favicon routes.

use crate::AppState;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension,
};
use std::path::Path;
use std::sync::Arc;

/// Handler for `GET /` — serves the voice interface document.
pub async fn index_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let path = Path::new(&state.config.server.static_dir).join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(document) => Html(document).into_response(),
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "failed to read interface document"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "interface document unavailable",
            )
                .into_response()
        }
    }
}

/// Handler for `GET /favicon.ico`.
///
/// Any failure, missing file included, becomes an empty 204 so browsers stop
/// logging 404 noise in the console.
pub async fn favicon_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let path = Path::new(&state.config.server.static_dir).join("favicon.ico");
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/x-icon")], bytes).into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
