use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event type tags used by the client sync pipeline
pub mod event_type {
    pub const PRESENCE: &str = "m.presence";
    pub const ROOM_MESSAGE: &str = "m.room.message";
}

/// A raw event as delivered in a sync response section
///
/// The content is kept as an untyped JSON object; typed views such as
/// [`crate::PresenceEvent`] are produced by dedicated decode steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncEvent {
    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event sender user ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,

    /// Event content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,
}

impl SyncEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self { event_type: event_type.into(), sender: None, content: None }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the content; anything other than a JSON object clears it
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = match content {
            Value::Object(map) => Some(map),
            _ => None,
        };
        self
    }

    pub fn is_type(&self, event_type: &str) -> bool {
        self.event_type == event_type
    }
}
