use std::path::Path;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Builds the full router: API routes, health check, and the static frontend
/// as the fallback for everything outside `/api/`.
pub fn create_app(state: AppState, frontend_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(routes::auth::routes())
        .merge(routes::policy::routes())
        .route("/api/", any(routes::frontend::api_not_found))
        .route("/api/{*path}", any(routes::frontend::api_not_found));

    routes::frontend::with_frontend(api, frontend_dir)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
