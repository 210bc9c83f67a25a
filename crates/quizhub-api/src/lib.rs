//! # quizhub-api
//!
//! HTTP API layer for Quizhub built on Axum.
//!
//! Provides the authentication endpoints (login, logout, logout-all,
//! register, me), health checks, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
