use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use policy_shared::models::error::ErrorResponse;
use policy_shared::models::policy::responses::FunctionResponse;
use policy_shared::services::errors::{
    auth_service_errors::AuthServiceError, policy_service_errors::PolicyServiceError,
    token_errors::TokenError,
};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug)]
pub enum ApiError {
    AuthService(AuthServiceError),
    PolicyService(PolicyServiceError),
    Token(TokenError),
    Unauthorized(&'static str),
    BadRequest(String),
    NotFound,
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<PolicyServiceError> for ApiError {
    fn from(error: PolicyServiceError) -> Self {
        ApiError::PolicyService(error)
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::Token(error)
    }
}

impl ApiError {
    /// Status code and the message safe to show the caller. Internal details
    /// are logged here and replaced by a generic message.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::AuthService(AuthServiceError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                AuthServiceError::InvalidCredentials.to_string(),
            ),
            ApiError::AuthService(AuthServiceError::ValidationError(msg)) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            ApiError::AuthService(
                err @ (AuthServiceError::AccountServiceError(_) | AuthServiceError::Token(_)),
            ) => {
                error!("Login failed internally: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            ApiError::Token(TokenError::MissingUsername) => (
                StatusCode::UNAUTHORIZED,
                "Token does not carry a username".to_string(),
            ),
            ApiError::Token(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.to_string()),

            ApiError::PolicyService(
                err @ (PolicyServiceError::AccountNotFound | PolicyServiceError::FieldNotSet(_)),
            ) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::PolicyService(err @ PolicyServiceError::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::PolicyService(err @ PolicyServiceError::AccountServiceError(_)) => {
                error!("Policy lookup failed internally: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }

            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Same failures as [`ApiError`], rendered in the function-calling envelope
/// (`{"error_message": ...}`).
#[derive(Debug)]
pub struct FunctionError(pub ApiError);

impl From<ApiError> for FunctionError {
    fn from(error: ApiError) -> Self {
        FunctionError(error)
    }
}

impl From<PolicyServiceError> for FunctionError {
    fn from(error: PolicyServiceError) -> Self {
        FunctionError(ApiError::PolicyService(error))
    }
}

impl IntoResponse for FunctionError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        (status, Json(FunctionResponse::failure(message))).into_response()
    }
}
