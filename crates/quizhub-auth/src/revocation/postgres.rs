//! Postgres-backed revocation store wrapping the database repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::result::AppResult;
use quizhub_database::repositories::RevokedTokenRepository;
use quizhub_entity::session::RevokedToken;

use super::store::RevocationStore;

/// Production revocation store backed by the revoked_tokens table.
#[derive(Debug, Clone)]
pub struct PgRevocationStore {
    /// Revoked token database repository.
    repo: Arc<RevokedTokenRepository>,
}

impl PgRevocationStore {
    /// Creates a new Postgres-backed revocation store.
    pub fn new(repo: Arc<RevokedTokenRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RevocationStore for PgRevocationStore {
    async fn record_revocation(
        &self,
        jti: Uuid,
        token: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<RevokedToken> {
        self.repo.upsert(jti, token, user_id, expires_at, now).await
    }

    async fn is_revoked(&self, jti: Uuid) -> AppResult<bool> {
        self.repo.exists_by_jti(jti).await
    }

    async fn list_active(&self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<Vec<RevokedToken>> {
        self.repo.find_active_by_user(user_id, now).await
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        self.repo.delete_expired(now).await
    }
}
