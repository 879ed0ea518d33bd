//! HTTP service for Workboard.
//!
//! # Responsibility
//! - Prepare storage (migrations and seed load) before accepting requests.
//! - Serve the record resources until shutdown is requested.
//!
//! # Invariants
//! - The listener is bound only after the seed load succeeded.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, StartupError};
pub use router::build_router;
pub use state::AppState;

use log::info;
use workboard_core::{seed_from_dir, Database};

/// Opens the database and replaces its contents with the seed data.
///
/// Blocking; runs once before the server starts.
pub fn prepare_database(config: &ServerConfig) -> Result<Database, StartupError> {
    let database = Database::open(&config.db_path)?;
    let mut conn = database.connect()?;
    seed_from_dir(&mut conn, &config.data_dir)?;
    Ok(database)
}

/// Binds the listener and serves until Ctrl-C.
pub async fn serve(config: &ServerConfig, database: Database) -> Result<(), StartupError> {
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listen,
            source,
        })?;
    info!(
        "event=server_listen module=http status=ok addr={}",
        config.listen
    );

    axum::serve(listener, build_router(AppState::new(database)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("event=server_stop module=http status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("event=shutdown_requested module=http status=ok signal=ctrl_c");
    }
}
