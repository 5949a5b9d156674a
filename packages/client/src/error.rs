use cirrus_surrealdb::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Invalid sync response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },
    #[error("Logging already initialized")]
    LoggingInitialized,
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
