//! Shared request state.
//!
//! # Invariants
//! - The state holds no mutable data; each request opens its own connection.
//! - Storage work never runs on the async executor threads.

use crate::error::ApiError;
use rusqlite::Connection;
use workboard_core::{Database, RepoResult};

/// State injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    database: Database,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Runs `work` on the blocking pool with a fresh connection.
    pub async fn with_connection<F, T>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> RepoResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database.clone();
        let result = tokio::task::spawn_blocking(move || {
            let conn = database.connect()?;
            work(&conn)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("storage task failed: {err}")))?;

        Ok(result?)
    }
}
