//! Auth handlers — login, logout, logout-all, register, me.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use validator::Validate;

use quizhub_auth::session::LogoutOutcome;
use quizhub_core::error::AppError;
use quizhub_entity::user::model::CreateUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, RawBearer};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_manager
        .login(&req.username, &req.password, req.remember_me, Utc::now())
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.token.access_token,
        token_type: result.token.token_type,
        expires_at: result.token.expires_at,
    })))
}

/// POST /api/auth/logout
///
/// Uses the raw bearer token rather than the authenticated-user
/// extractor: revoking an already-expired token is defined as success,
/// so the full validation pass must not run first.
pub async fn logout(
    State(state): State<AppState>,
    RawBearer(token): RawBearer,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let outcome = state.revocation_service.logout(&token, Utc::now()).await?;

    let message = match outcome {
        LogoutOutcome::AlreadyRevoked => "Token already revoked",
        _ => "Successfully logged out",
    };

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: message.to_string(),
    })))
}

/// POST /api/auth/logout-all
///
/// Advances the acting user's blocklist date to now; every token issued
/// before this instant stops validating, including tokens this server
/// has never seen.
pub async fn logout_all(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .revocation_service
        .logout_all(auth.user.id, Utc::now())
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "All sessions have been logged out".to_string(),
    })))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    state.password_validator.validate(&req.password)?;

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
        })
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse::from(&auth.user)))
}
