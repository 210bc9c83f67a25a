//! Shared test fixtures: an auth stack wired to in-memory stores.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_auth::directory::{MemoryUserDirectory, UserDirectory};
use quizhub_auth::jwt::{TokenIssuer, TokenValidator};
use quizhub_auth::password::PasswordHasher;
use quizhub_auth::revocation::{MemoryRevocationStore, RevocationStore};
use quizhub_auth::session::{SessionManager, SessionRevocationService};
use quizhub_core::config::AuthConfig;

/// The full auth stack over in-memory stores.
pub struct TestStack {
    pub directory: Arc<MemoryUserDirectory>,
    pub revocations: Arc<MemoryRevocationStore>,
    pub hasher: Arc<PasswordHasher>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
    pub manager: SessionManager,
    pub service: SessionRevocationService,
}

impl TestStack {
    pub fn new() -> Self {
        Self::with_config(AuthConfig::default())
    }

    pub fn with_config(config: AuthConfig) -> Self {
        let directory = Arc::new(MemoryUserDirectory::new());
        let revocations = Arc::new(MemoryRevocationStore::new());
        let hasher = Arc::new(PasswordHasher::new());

        let dir_dyn: Arc<dyn UserDirectory> = directory.clone();
        let rev_dyn: Arc<dyn RevocationStore> = revocations.clone();

        let issuer = Arc::new(TokenIssuer::new(&config, Arc::clone(&dir_dyn)));
        let validator = Arc::new(TokenValidator::new(
            &config,
            Arc::clone(&dir_dyn),
            Arc::clone(&rev_dyn),
        ));

        let manager = SessionManager::new(
            Arc::clone(&dir_dyn),
            Arc::clone(&hasher),
            Arc::clone(&issuer),
        );
        let service = SessionRevocationService::new(
            Arc::clone(&validator),
            Arc::clone(&dir_dyn),
            Arc::clone(&rev_dyn),
        );

        Self {
            directory,
            revocations,
            hasher,
            issuer,
            validator,
            manager,
            service,
        }
    }

    /// Insert an active user with the given credentials.
    pub async fn create_user(&self, username: &str, password: &str) -> Uuid {
        let hash = self.hasher.hash_password(password).unwrap();
        self.directory.insert_active(username, &hash).await
    }
}

/// Instant helper: seconds since epoch.
pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

/// The default token window in seconds (30 minutes).
pub const DEFAULT_WINDOW_SECS: i64 = 30 * 60;

/// The remember-me token window in seconds (30 days).
pub const REMEMBER_ME_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;
