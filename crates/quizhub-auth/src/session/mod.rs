//! Session lifecycle: login and the logout / logout-all flows.

pub mod manager;
pub mod revocation;

pub use manager::{LoginResult, SessionManager};
pub use revocation::{LogoutOutcome, SessionRevocationService};
