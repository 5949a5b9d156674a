pub mod presence;

use crate::error::SyncError;
use crate::sync::presence::PresenceSyncHandler;
use cirrus_entity::{PresenceResponse, SyncResponse, UserPresence};
use cirrus_surrealdb::{PresenceStore, SyncStateRepository, SyncTransaction};
use surrealdb::{Surreal, engine::any::Any};
use tracing::{info, warn};

/// Outcome of one processed sync response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub next_batch: String,
    pub presence_written: usize,
}

/// Persists sync responses, one write transaction per sync cycle
pub struct SyncResponseProcessor {
    db: Surreal<Any>,
    presence_handler: PresenceSyncHandler,
}

impl SyncResponseProcessor {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db, presence_handler: PresenceSyncHandler::new() }
    }

    /// Parse and process a raw `/sync` body
    pub async fn process_json(&self, body: &str) -> Result<SyncReport, SyncError> {
        let response: SyncResponse = serde_json::from_str(body)?;
        self.process(&response).await
    }

    /// Apply one sync response atomically: either every write of the cycle,
    /// including the new `next_batch`, is committed or none is
    pub async fn process(&self, response: &SyncResponse) -> Result<SyncReport, SyncError> {
        let mut txn = SyncTransaction::new(self.db.clone());

        let presence_written = match self.presence_handler.handle(&mut txn, response.presence.as_ref()) {
            Ok(written) => written,
            Err(e) => {
                warn!("Presence ingestion failed, discarding sync cycle: {}", e);
                txn.rollback();
                return Err(e.into());
            },
        };
        txn.save_next_batch(&response.next_batch)?;
        txn.commit().await?;

        info!(
            "Processed sync response {} ({} presence updates)",
            response.next_batch, presence_written
        );
        Ok(SyncReport { next_batch: response.next_batch.clone(), presence_written })
    }

    /// Persist a presence fetched from `GET /presence/{userId}/status`
    pub async fn store_presence_response(
        &self,
        user_id: &str,
        response: PresenceResponse,
    ) -> Result<UserPresence, SyncError> {
        let mut txn = SyncTransaction::new(self.db.clone());
        let stored = txn.upsert_user_presence(UserPresence::from_response(user_id, response))?;
        txn.update_direct_user_presence(&stored)?;
        txn.commit().await?;
        Ok(stored)
    }

    /// Token to resume syncing from, if a cycle was committed before
    pub async fn next_batch(&self) -> Result<Option<String>, SyncError> {
        Ok(SyncStateRepository::new(self.db.clone()).get_next_batch().await?)
    }
}
