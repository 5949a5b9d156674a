use crate::types::{PresenceState, SyncEvent};
use serde_json::{Map, Value};

/// Typed view of an `m.presence` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEvent {
    pub sender_id: String,
    pub presence: PresenceState,
    /// Milliseconds since the user was last active
    pub last_active_ago: Option<u64>,
    pub status_msg: Option<String>,
    pub currently_active: Option<bool>,
    pub avatar_url: Option<String>,
}

impl PresenceEvent {
    /// Decode the payload of an `m.presence` sync event.
    ///
    /// The event type is not checked here; callers select presence events
    /// first. Returns `None` when the event has no content or sender, or
    /// carries an unrecognized `presence` token. Optional fields of the wrong
    /// JSON type decode as absent, as does a `last_active_ago` outside the
    /// stored integer range.
    pub fn decode(event: &SyncEvent) -> Option<Self> {
        let content = event.content.as_ref()?;
        let sender_id = event.sender.clone()?;
        let presence = content.get("presence").and_then(Value::as_str).and_then(PresenceState::from_token)?;

        Some(Self {
            sender_id,
            presence,
            last_active_ago: millis_field(content, "last_active_ago"),
            status_msg: string_field(content, "status_msg"),
            currently_active: content.get("currently_active").and_then(Value::as_bool),
            avatar_url: string_field(content, "avatar_url"),
        })
    }
}

// Stored as a signed 64-bit int
fn millis_field(content: &Map<String, Value>, key: &str) -> Option<u64> {
    content.get(key).and_then(Value::as_i64).and_then(|ms| u64::try_from(ms).ok())
}

fn string_field(content: &Map<String, Value>, key: &str) -> Option<String> {
    content.get(key).and_then(Value::as_str).map(str::to_owned)
}
