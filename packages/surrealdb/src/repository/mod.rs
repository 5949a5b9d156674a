pub mod error;
pub mod presence;
pub mod room_summary;
pub mod sync_state;
pub mod transaction;

pub use error::RepositoryError;
pub use presence::PresenceRepository;
pub use room_summary::RoomSummaryRepository;
pub use sync_state::SyncStateRepository;
pub use transaction::{PresenceStore, SyncTransaction};
