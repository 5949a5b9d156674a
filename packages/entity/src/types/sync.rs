use crate::types::SyncEvent;
use serde::{Deserialize, Serialize};

/// Response of `GET /_matrix/client/v3/sync`, restricted to the sections
/// this client persists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncResponse {
    pub next_batch: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresenceSyncResponse>,
}

/// The `presence` section of a sync response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresenceSyncResponse {
    #[serde(default)]
    pub events: Vec<SyncEvent>,
}

impl PresenceSyncResponse {
    pub fn new(events: Vec<SyncEvent>) -> Self {
        Self { events }
    }
}
