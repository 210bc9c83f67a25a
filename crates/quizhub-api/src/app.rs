//! Application builder — wires repositories, auth services, router, and
//! background tasks into a running Axum server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use chrono::Utc;
use sqlx::PgPool;

use quizhub_auth::directory::{PgUserDirectory, UserDirectory};
use quizhub_auth::jwt::{TokenIssuer, TokenValidator};
use quizhub_auth::password::{PasswordHasher, PasswordValidator};
use quizhub_auth::revocation::{PgRevocationStore, RevocationStore, RevocationSweep};
use quizhub_auth::session::{SessionManager, SessionRevocationService};
use quizhub_core::config::AppConfig;
use quizhub_core::error::AppError;
use quizhub_database::repositories::{RevokedTokenRepository, UserRepository};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let revoked_repo = Arc::new(RevokedTokenRepository::new(db_pool.clone()));

    let directory: Arc<dyn UserDirectory> =
        Arc::new(PgUserDirectory::new(Arc::clone(&user_repo)));
    let revocations: Arc<dyn RevocationStore> =
        Arc::new(PgRevocationStore::new(Arc::clone(&revoked_repo)));

    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let token_issuer = Arc::new(TokenIssuer::new(&config.auth, Arc::clone(&directory)));
    let token_validator = Arc::new(TokenValidator::new(
        &config.auth,
        Arc::clone(&directory),
        Arc::clone(&revocations),
    ));

    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&directory),
        Arc::clone(&password_hasher),
        Arc::clone(&token_issuer),
    ));
    let revocation_service = Arc::new(SessionRevocationService::new(
        Arc::clone(&token_validator),
        Arc::clone(&directory),
        Arc::clone(&revocations),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        user_repo,
        directory,
        revocations,
        password_hasher,
        password_validator,
        token_issuer,
        token_validator,
        session_manager,
        revocation_service,
    }
}

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Quizhub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let sweep_interval = config.auth.revocation_sweep_interval_minutes;

    let state = build_state(config, db_pool);

    spawn_revocation_sweep(&state, sweep_interval);

    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Quizhub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}

/// Spawns the periodic retention sweep for expired revocation records.
fn spawn_revocation_sweep(state: &AppState, interval_minutes: u64) {
    let sweep = RevocationSweep::new(Arc::clone(&state.revocations));
    tokio::spawn(async move {
        let period = Duration::from_secs(interval_minutes.max(1) * 60);
        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately; skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = sweep.run_sweep(Utc::now()).await {
                tracing::error!(error = %e, "Revocation sweep failed");
            }
        }
    });
}

/// Completes when the process receives a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
