//! Bearer token extractors.
//!
//! [`AuthUser`] runs the full validation pass and injects the caller's
//! identity. [`RawBearer`] only pulls the token string out of the
//! `Authorization` header; logout uses it, because an expired token
//! must still be revocable.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;

use quizhub_auth::error::AuthError;
use quizhub_auth::jwt::Claims;
use quizhub_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user.
    pub user: User,
    /// The validated token claims.
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let claims = state.token_validator.validate(&token, Utc::now()).await?;

        // The validator has already established the subject exists.
        let user = state
            .directory
            .find_by_username(&claims.sub)
            .await
            .map_err(AuthError::Store)?
            .ok_or(AuthError::UnknownSubject)?;

        Ok(AuthUser { user, claims })
    }
}

/// The raw bearer token string, with no validation applied.
#[derive(Debug, Clone)]
pub struct RawBearer(pub String);

impl FromRequestParts<AppState> for RawBearer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RawBearer(bearer_token(parts)?))
    }
}

/// Pulls the token out of the `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Result<String, ApiError> {
    let auth_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Malformed)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Malformed)?;

    Ok(token.to_string())
}
