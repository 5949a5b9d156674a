use crate::migration;
use crate::repository::error::RepositoryError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use surrealdb::{Surreal, engine::any::Any};
use tracing::{debug, info};

/// Storage engine for SurrealDB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageEngine {
    /// In-process memory store, lost on exit
    Memory,
    /// SurrealKV storage (for local file-based databases)
    SurrealKv,
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// Storage engine to use
    pub engine: StorageEngine,

    /// Path to the database file, ignored by the memory engine
    pub path: PathBuf,

    /// Namespace to use
    pub namespace: String,

    /// Database to use
    pub database: String,

    /// Whether the table definitions should be applied on connect
    pub run_migrations: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        let path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("./"))
            .join("cirrus")
            .join("cirrus.db");

        Self {
            engine: StorageEngine::SurrealKv,
            path,
            namespace: "cirrus".to_string(),
            database: "matrix".to_string(),
            run_migrations: true,
        }
    }
}

impl DbConfig {
    /// Configuration for a throwaway in-memory database
    pub fn memory() -> Self {
        Self { engine: StorageEngine::Memory, path: PathBuf::new(), ..Self::default() }
    }

    /// Connection string understood by `surrealdb::engine::any`
    pub fn endpoint(&self) -> String {
        match self.engine {
            StorageEngine::Memory => "mem://".to_string(),
            StorageEngine::SurrealKv => format!("surrealkv://{}", self.path.display()),
        }
    }

    /// Ensures the database directory exists
    pub fn ensure_db_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            debug!("Ensuring database directory exists: {}", parent.display());
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), RepositoryError> {
        if self.namespace.trim().is_empty() {
            return Err(RepositoryError::Configuration {
                field: "namespace".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.database.trim().is_empty() {
            return Err(RepositoryError::Configuration {
                field: "database".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.engine == StorageEngine::SurrealKv && self.path.as_os_str().is_empty() {
            return Err(RepositoryError::Configuration {
                field: "path".to_string(),
                message: "required by the surrealkv engine".to_string(),
            });
        }
        Ok(())
    }
}

/// Connect to SurrealDB using the provided configuration
pub async fn connect(config: &DbConfig) -> Result<Surreal<Any>, RepositoryError> {
    config.validate()?;
    if config.engine == StorageEngine::SurrealKv {
        config.ensure_db_dir()?;
    }

    let endpoint = config.endpoint();
    info!("Connecting to SurrealDB at {}", endpoint);

    let db = surrealdb::engine::any::connect(endpoint).await?;
    db.use_ns(&config.namespace).use_db(&config.database).await?;

    if config.run_migrations {
        migration::apply_schema(&db).await?;
    }

    Ok(db)
}
