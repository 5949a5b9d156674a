use cirrus_entity::{PresenceEvent, PresenceSyncResponse, UserPresence, event_type};
use cirrus_surrealdb::{PresenceStore, RepositoryError};
use tracing::debug;

/// Folds the presence section of a sync response into the presence store
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceSyncHandler;

impl PresenceSyncHandler {
    pub fn new() -> Self {
        Self
    }

    /// Store every decodable `m.presence` event of `response` through `store`.
    ///
    /// Events are applied in order, so the last event for a user wins. Other
    /// event types and malformed presence events are skipped. Each upsert is
    /// followed by the direct-room update for the same user. The caller owns
    /// the transaction behind `store`; only store failures are returned.
    ///
    /// Returns the number of presence records written.
    pub fn handle<S: PresenceStore>(
        &self,
        store: &mut S,
        response: Option<&PresenceSyncResponse>,
    ) -> Result<usize, RepositoryError> {
        let Some(response) = response else {
            return Ok(0);
        };

        let mut written = 0;
        for event in response.events.iter().filter(|event| event.is_type(event_type::PRESENCE)) {
            let Some(presence) = PresenceEvent::decode(event) else {
                debug!("Skipping malformed presence event from {:?}", event.sender);
                continue;
            };

            let stored = store.upsert_user_presence(UserPresence::from(presence))?;
            store.update_direct_user_presence(&stored)?;
            written += 1;
        }

        debug!("Stored {} presence updates", written);
        Ok(written)
    }
}
