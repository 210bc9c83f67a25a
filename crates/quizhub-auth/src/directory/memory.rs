//! In-memory user directory using a Tokio mutex for single-node use.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::error::AppError;
use quizhub_core::result::AppResult;
use quizhub_entity::user::{User, UserStatus};

use super::UserDirectory;

/// In-memory directory keyed by user ID.
///
/// Suitable for tests and single-node development; production wiring
/// uses [`super::PgUserDirectory`].
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    /// Protected user map.
    users: Arc<tokio::sync::Mutex<HashMap<Uuid, User>>>,
}

impl MemoryUserDirectory {
    /// Creates an empty in-memory directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub async fn insert(&self, user: User) {
        self.users.lock().await.insert(user.id, user);
    }

    /// Build and insert an active user, returning its generated ID.
    pub async fn insert_active(&self, username: &str, password_hash: &str) -> Uuid {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: None,
            password_hash: password_hash.to_string(),
            status: UserStatus::Active,
            token_blocklist_date: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        let id = user.id;
        self.insert(user).await;
        id
    }

    /// Remove a user record, returning it if present.
    pub async fn remove(&self, id: Uuid) -> Option<User> {
        self.users.lock().await.remove(&id)
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(&id).cloned())
    }

    async fn set_token_blocklist_date(
        &self,
        user_id: Uuid,
        date: Option<DateTime<Utc>>,
    ) -> AppResult<()> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        user.token_blocklist_date = date;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;
        user.last_login_at = Some(at);
        Ok(())
    }
}
