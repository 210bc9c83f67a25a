//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use quizhub_auth::directory::UserDirectory;
use quizhub_auth::jwt::{TokenIssuer, TokenValidator};
use quizhub_auth::revocation::RevocationStore;
use quizhub_auth::password::{PasswordHasher, PasswordValidator};
use quizhub_auth::session::{SessionManager, SessionRevocationService};
use quizhub_core::config::AppConfig;
use quizhub_database::repositories::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// User repository (registration writes).
    pub user_repo: Arc<UserRepository>,
    /// User lookup seam.
    pub directory: Arc<dyn UserDirectory>,
    /// Revoked-token store.
    pub revocations: Arc<dyn RevocationStore>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy enforcement.
    pub password_validator: Arc<PasswordValidator>,
    /// Token issuer.
    pub token_issuer: Arc<TokenIssuer>,
    /// Token validator.
    pub token_validator: Arc<TokenValidator>,
    /// Login flow orchestration.
    pub session_manager: Arc<SessionManager>,
    /// Logout / logout-all orchestration.
    pub revocation_service: Arc<SessionRevocationService>,
}
