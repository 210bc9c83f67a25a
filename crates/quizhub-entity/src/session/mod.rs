//! Session-related entities: revoked token records and token value types.

pub mod revoked_token;
pub mod token;

pub use revoked_token::RevokedToken;
pub use token::BearerToken;
