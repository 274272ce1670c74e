//! blogctl-server: a small blog served over HTTP
//!
//! Lists, shows, creates, edits and deletes short text posts stored in a
//! single SQLite file, rendering plain HTML pages.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

use std::sync::Arc;

pub use config::{BlogConfig, ConfigError};
pub use db::{DbError, MemoryPostStore, PostStore, SqlitePostStore};
pub use http::{build_router, run_server, AppError, AppState, ServerError};

/// Open the configured database and serve until shutdown.
pub async fn serve(config: BlogConfig) -> Result<(), Error> {
    let store = SqlitePostStore::open(config.database_path.clone()).await?;
    run_server(AppState::new(Arc::new(store), config)).await?;
    Ok(())
}

/// Top-level error for [`serve`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Server(#[from] ServerError),
}
