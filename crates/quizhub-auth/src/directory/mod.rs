//! The user lookup seam consumed by the token issuer, validator, and
//! session services.
//!
//! The rest of the platform owns user records; this crate only needs to
//! resolve a subject, flip the blocklist date, and stamp logins. Keeping
//! that behind a trait lets the whole token lifecycle run against an
//! in-memory directory in tests.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use quizhub_core::result::AppResult;
use quizhub_entity::user::User;

pub use memory::MemoryUserDirectory;
pub use postgres::PgUserDirectory;

/// User lookup and session-related account mutations.
#[async_trait]
pub trait UserDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Resolve a user by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Resolve a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Set or clear the user's token blocklist date in one atomic write.
    async fn set_token_blocklist_date(
        &self,
        user_id: Uuid,
        date: Option<DateTime<Utc>>,
    ) -> AppResult<()>;

    /// Record a successful login.
    async fn record_login(&self, user_id: Uuid, at: DateTime<Utc>) -> AppResult<()>;
}
