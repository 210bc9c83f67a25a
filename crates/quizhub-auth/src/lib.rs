//! # quizhub-auth
//!
//! Session token lifecycle for the Quizhub platform: issuance, validation,
//! and dual-mode revocation (per-token revocation records plus a per-user
//! blocklist date for mass logout).
//!
//! ## Modules
//!
//! - `jwt` — token claims, signing, and the ordered validation pass
//! - `password` — Argon2id password hashing and policy enforcement
//! - `directory` — the user lookup and blocklist-date seam, with
//!   Postgres and in-memory implementations
//! - `revocation` — the revoked-token store and the retention sweep
//! - `session` — login and the logout / logout-all orchestration

pub mod directory;
pub mod error;
pub mod jwt;
pub mod password;
pub mod revocation;
pub mod session;

pub use directory::UserDirectory;
pub use error::AuthError;
pub use jwt::{Claims, TokenIssuer, TokenValidator};
pub use password::{PasswordHasher, PasswordValidator};
pub use revocation::{RevocationStore, RevocationSweep};
pub use session::{SessionManager, SessionRevocationService};
