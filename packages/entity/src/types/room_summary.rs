use crate::types::UserPresence;
use serde::{Deserialize, Serialize};

/// Locally persisted summary of a room
///
/// For direct rooms `direct_user_id` names the peer, and
/// `direct_user_presence` is filled when the stored presence link is
/// resolved on read. The link itself is owned by the store and never
/// written from this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default)]
    pub is_direct: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_user_id: Option<String>,

    #[serde(default, skip_serializing)]
    pub direct_user_presence: Option<UserPresence>,
}

impl RoomSummary {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            display_name: None,
            is_direct: false,
            direct_user_id: None,
            direct_user_presence: None,
        }
    }

    /// A 1:1 room with `user_id` as the peer
    pub fn direct(room_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            is_direct: true,
            direct_user_id: Some(user_id.into()),
            ..Self::new(room_id)
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}
