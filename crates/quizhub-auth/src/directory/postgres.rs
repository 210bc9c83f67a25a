//! Postgres-backed user directory wrapping the database repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::result::AppResult;
use quizhub_database::repositories::UserRepository;
use quizhub_entity::user::User;

use super::UserDirectory;

/// Production directory backed by the users table.
#[derive(Debug, Clone)]
pub struct PgUserDirectory {
    /// User database repository.
    repo: Arc<UserRepository>,
}

impl PgUserDirectory {
    /// Creates a new Postgres-backed directory.
    pub fn new(repo: Arc<UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn set_token_blocklist_date(
        &self,
        user_id: Uuid,
        date: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        self.repo.set_token_blocklist_date(user_id, date).await
    }

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        self.repo.touch_last_login(user_id, at).await
    }
}
