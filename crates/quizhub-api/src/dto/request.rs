//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Request an extended session.
    #[serde(default)]
    pub remember_me: bool,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Email address.
    #[validate(email)]
    pub email: Option<String>,
    /// Plaintext password; hashed before storage.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
