//! Server configuration loaded from environment variables

use cdao_core::{CdaoError, Result};

/// Which storage backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Process-local state, lost on restart. The development default.
    Memory,
    /// Embedded SQLite database.
    Sqlite,
}

impl std::str::FromStr for BackendKind {
    type Err = CdaoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(BackendKind::Memory),
            "sqlite" | "database" => Ok(BackendKind::Sqlite),
            other => Err(CdaoError::Config(format!(
                "unknown STORAGE_BACKEND '{}', expected 'memory' or 'sqlite'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub backend: BackendKind,
    pub database_path: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// When the SQLite backend is selected, `DATABASE_PATH` must be set and
    /// non-empty; startup fails here rather than on first use.
    pub fn from_env() -> Result<Self> {
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string());

        let backend = match std::env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::Memory,
        };

        let database_path = std::env::var("DATABASE_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty());

        if backend == BackendKind::Sqlite && database_path.is_none() {
            return Err(CdaoError::Config(
                "STORAGE_BACKEND=sqlite requires DATABASE_PATH to be set and non-empty".to_string(),
            ));
        }

        Ok(Self {
            bind_address,
            backend,
            database_path,
        })
    }
}
