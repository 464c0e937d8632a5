use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

const BEARER_SCHEME: &str = "bearer";

#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Pulls the token out of an `Authorization` value.
///
/// Accepts `Bearer <token>` (scheme matched case-insensitively) or the bare
/// token. Returns `None` when no token is left after stripping the scheme.
pub fn extract_bearer_token(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        _ if value.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => value,
    };
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                warn!("Missing Authorization header");
                ApiError::Unauthorized("Missing Authorization header")
            })?
            .to_str()
            .map_err(|_| {
                warn!("Authorization header is not valid text");
                ApiError::Unauthorized("Invalid Authorization header")
            })?;

        let token = extract_bearer_token(auth_header).ok_or_else(|| {
            warn!("Authorization header carries no token");
            ApiError::Unauthorized("Invalid Authorization header format")
        })?;

        let username = state.token_service.username_from_token(token)?;

        Ok(AuthenticatedUser { username })
    }
}
