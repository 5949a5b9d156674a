use crate::error::ConfigError;
use cirrus_surrealdb::DbConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Client configuration, usually read from a TOML file
///
/// ```toml
/// log_filter = "cirrus_client=debug,info"
///
/// [store]
/// engine = "surrealkv"
/// path = "/home/me/.local/share/cirrus/cirrus.db"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` wins when set
    pub log_filter: String,

    /// Local store settings
    pub store: DbConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { log_filter: "info".to_string(), store: DbConfig::default() }
    }
}

impl ClientConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.store.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_toml_str(&input)
    }
}
