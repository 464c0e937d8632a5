use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

use crate::{
    error::{ApiError, FunctionError},
    middleware::auth::AuthenticatedUser,
    state::AppState,
};
use policy_shared::models::policy::requests::FunctionRequest;
use policy_shared::models::policy::responses::{
    FunctionResponse, PolicyCostResponse, PolicyDateResponse,
};
use policy_shared::models::policy::PolicyField;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/policy/cost", get(get_policy_cost))
        .route("/api/policy/date", get(get_policy_date))
        .route("/api/policy/function", post(policy_function))
}

async fn get_policy_cost(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<PolicyCostResponse>, ApiError> {
    info!(
        "Processing policy cost request for user: {}",
        authenticated_user.username
    );
    let value = state
        .policy_service
        .get_field(&authenticated_user.username, PolicyField::Cost)
        .await?;
    Ok(Json(PolicyCostResponse {
        policy_cost: value.to_string(),
    }))
}

async fn get_policy_date(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<PolicyDateResponse>, ApiError> {
    info!(
        "Processing policy date request for user: {}",
        authenticated_user.username
    );
    let value = state
        .policy_service
        .get_field(&authenticated_user.username, PolicyField::DueDate)
        .await?;
    Ok(Json(PolicyDateResponse {
        policy_due_date: value.to_string(),
    }))
}

/// Function-calling entry point: `{"action": "get_cost" | "get_date"}`.
///
/// Checks run in order: token, body, `action` presence, account, action value.
async fn policy_function(
    State(state): State<AppState>,
    authenticated_user: Result<AuthenticatedUser, ApiError>,
    payload: Result<Json<FunctionRequest>, JsonRejection>,
) -> Result<Json<FunctionResponse>, FunctionError> {
    let authenticated_user = authenticated_user?;

    let Json(request) = payload.map_err(|e| {
        warn!("Rejected function body: {}", e);
        ApiError::BadRequest("Request body must be a JSON object".to_string())
    })?;
    let action = request
        .action
        .filter(|action| !action.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: action".to_string()))?;

    info!(
        "Processing policy function {} for user: {}",
        action, authenticated_user.username
    );
    let value = state
        .policy_service
        .run_action(&authenticated_user.username, &action)
        .await?;
    Ok(Json(FunctionResponse::success(&value)))
}
