use std::path::Path;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{StatusCode, Uri},
    Router,
};
use tower_http::services::ServeDir;
use tracing::debug;

use crate::{error::ApiError, state::AppState};

/// Serves the built frontend bundle for every path no other route claims.
/// `/` resolves to `index.html`.
pub fn with_frontend(router: Router<AppState>, frontend_dir: &Path) -> Router<AppState> {
    debug!("Serving frontend from {}", frontend_dir.display());
    let files = ServeDir::new(frontend_dir)
        .append_index_html_on_directories(true)
        .not_found_service(static_not_found.into_service());
    router.fallback_service(files)
}

async fn static_not_found(uri: Uri) -> (StatusCode, String) {
    let requested = match uri.path().trim_start_matches('/') {
        "" => "index.html",
        path => path,
    };
    debug!("Static file not found: {}", requested);
    (StatusCode::NOT_FOUND, format!("{} not found", requested))
}

/// Unmatched `/api/...` paths never fall through to the file server.
pub async fn api_not_found() -> ApiError {
    ApiError::NotFound
}
