use crate::types::{PresenceEvent, PresenceResponse, PresenceState};
use serde::{Deserialize, Serialize};

/// Persisted presence of a single user, keyed by `user_id`
///
/// Absent optional fields are stored as absent. A newer record for the same
/// user replaces every field of the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPresence {
    pub user_id: String,

    pub presence: PresenceState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_ago: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currently_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserPresence {
    pub fn new(user_id: impl Into<String>, presence: PresenceState) -> Self {
        Self {
            user_id: user_id.into(),
            presence,
            last_active_ago: None,
            status_msg: None,
            currently_active: None,
            avatar_url: None,
        }
    }

    /// Presence fetched directly from the server; the endpoint carries no avatar
    pub fn from_response(user_id: impl Into<String>, response: PresenceResponse) -> Self {
        Self {
            user_id: user_id.into(),
            presence: response.presence,
            last_active_ago: response.last_active_ago,
            status_msg: response.status_msg,
            currently_active: response.currently_active,
            avatar_url: None,
        }
    }

    pub fn is_online(&self) -> bool {
        self.presence == PresenceState::Online
    }
}

impl From<PresenceEvent> for UserPresence {
    fn from(event: PresenceEvent) -> Self {
        Self {
            user_id: event.sender_id,
            presence: event.presence,
            last_active_ago: event.last_active_ago,
            status_msg: event.status_msg,
            currently_active: event.currently_active,
            avatar_url: event.avatar_url,
        }
    }
}
