use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{debug, warn};

use crate::{error::ApiError, state::AppState};
use policy_shared::models::auth::requests::LoginRequest;
use policy_shared::models::auth::responses::LoginResponse;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(login_data) = payload.map_err(|e| {
        warn!("Rejected login body: {}", e);
        ApiError::BadRequest("Request body must be a JSON object".to_string())
    })?;

    let username = login_data.username.unwrap_or_default();
    let password = login_data.password.unwrap_or_default();

    let response = state
        .auth_service
        .authenticate_user(&username, &password)
        .await
        .map_err(|e| {
            warn!("Failed to authenticate user {}: {}", username, e);
            ApiError::from(e)
        })?;
    debug!("User logged in: {}", username);
    Ok(Json(response))
}
