//! Login flow: credential check, blocklist date handling, token issuance.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use quizhub_entity::session::BearerToken;
use quizhub_entity::user::User;

use crate::directory::UserDirectory;
use crate::error::AuthError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The issued bearer token.
    pub token: BearerToken,
    /// The authenticated user.
    pub user: User,
}

/// Orchestrates the login flow.
pub struct SessionManager {
    /// Subject resolution and blocklist date updates.
    directory: Arc<dyn UserDirectory>,
    /// Password verification.
    password_hasher: Arc<PasswordHasher>,
    /// Token issuance.
    issuer: Arc<TokenIssuer>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        password_hasher: Arc<PasswordHasher>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            directory,
            password_hasher,
            issuer,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Resolve the user (case-insensitive username)
    /// 2. Verify the password
    /// 3. Require an active account
    /// 4. Handle the blocklist date: a future date blocks login with
    ///    `SessionsSuspended`; an elapsed date is cleared so future
    ///    validations skip the comparison
    /// 5. Issue a token and stamp the login
    ///
    /// Unknown username, wrong password, and inactive account all
    /// collapse to `InvalidCredentials`.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
        now: DateTime<Utc>,
    ) -> Result<LoginResult, AuthError> {
        let mut user = self
            .directory
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self
            .password_hasher
            .verify_password(password, &user.password_hash)
        {
            debug!(username, "Password verification failed");
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active() {
            debug!(username, "Inactive account attempted login");
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(blocklist_date) = user.token_blocklist_date {
            if blocklist_date > now {
                return Err(AuthError::SessionsSuspended {
                    until: blocklist_date,
                });
            }
            // The date has elapsed; clear it so validation stays cheap.
            self.directory
                .set_token_blocklist_date(user.id, None)
                .await?;
            user.token_blocklist_date = None;
        }

        let issued = self.issuer.issue(&user.username, remember_me, now).await?;
        self.directory.record_login(user.id, now).await?;

        info!(user_id = %user.id, remember_me, "User logged in");

        let expires_at = issued.expires_at();
        Ok(LoginResult {
            token: BearerToken::new(issued.token, expires_at),
            user,
        })
    }
}
