//! Cirrus Matrix client: sync ingestion
//!
//! Folds the presence section of sync responses into the local SurrealDB
//! store and keeps direct-room summaries pointing at their peer's latest
//! presence.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod logging;
pub mod sync;

pub use config::ClientConfig;
pub use error::{ConfigError, SyncError};
pub use sync::presence::PresenceSyncHandler;
pub use sync::{SyncReport, SyncResponseProcessor};
