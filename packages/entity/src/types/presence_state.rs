use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability state reported in `m.presence` events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresenceState {
    Online,
    Offline,
    Unavailable,
    Unknown,
}

impl PresenceState {
    /// Parse a wire token; unrecognized tokens yield `None`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "unavailable" => Some(Self::Unavailable),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Unavailable => "unavailable",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
