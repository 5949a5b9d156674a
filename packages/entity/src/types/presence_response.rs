use crate::types::PresenceState;
use serde::{Deserialize, Serialize};

/// Body of `GET /_matrix/client/v3/presence/{userId}/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceResponse {
    pub presence: PresenceState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_ago: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_active: Option<bool>,
}
