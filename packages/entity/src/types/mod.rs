pub mod presence_event;
pub mod presence_response;
pub mod presence_state;
pub mod room_summary;
pub mod sync;
pub mod sync_event;
pub mod user_presence;

pub use presence_event::PresenceEvent;
pub use presence_response::PresenceResponse;
pub use presence_state::PresenceState;
pub use room_summary::RoomSummary;
pub use sync::{PresenceSyncResponse, SyncResponse};
pub use sync_event::{SyncEvent, event_type};
pub use user_presence::UserPresence;
