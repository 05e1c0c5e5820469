//! Storage layer
//!
//! Two interchangeable backends behind the `Storage` contract: a
//! process-local in-memory store for development and demos, and an embedded
//! SQLite store for deployments that need durability. The backend is chosen
//! once at startup and injected into the router state for the process
//! lifetime.

mod db;
mod demo;
mod memory;

pub use db::Database;
pub use memory::MemoryStore;

use crate::config::{BackendKind, ServerConfig};
use cdao_core::{CdaoError, Result, Storage};
use std::sync::Arc;

/// Build the backend selected by the configuration.
///
/// The SQLite pool is only opened when that backend is actually selected, so
/// a process configured for in-memory storage starts with no database
/// reachable.
pub async fn connect(config: &ServerConfig) -> Result<Arc<dyn Storage>> {
    match config.backend {
        BackendKind::Memory => Ok(Arc::new(MemoryStore::new())),
        BackendKind::Sqlite => {
            let path = config.database_path.as_deref().ok_or_else(|| {
                CdaoError::Config("sqlite backend selected without DATABASE_PATH".to_string())
            })?;
            let db = Database::connect(path).await?;
            Ok(Arc::new(db))
        }
    }
}
