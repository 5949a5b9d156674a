use crate::repository::error::RepositoryError;
use crate::repository::transaction::SyncTransaction;
use cirrus_entity::{RoomSummary, UserPresence};
use surrealdb::{Surreal, engine::any::Any};

#[derive(Clone)]
pub struct RoomSummaryRepository {
    db: Surreal<Any>,
}

impl RoomSummaryRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Insert or replace a summary in its own transaction
    pub async fn upsert(&self, summary: &RoomSummary) -> Result<(), RepositoryError> {
        let mut txn = SyncTransaction::new(self.db.clone());
        txn.upsert_room_summary(summary)?;
        txn.commit().await?;
        Ok(())
    }

    /// Get a summary with its direct peer's presence resolved
    pub async fn get_by_room_id(&self, room_id: &str) -> Result<Option<RoomSummary>, RepositoryError> {
        let mut result = self
            .db
            .query("SELECT * FROM type::thing('room_summary', $room_id) FETCH direct_user_presence")
            .bind(("room_id", room_id.to_string()))
            .await?;
        let summary: Option<RoomSummary> = result.take(0)?;
        Ok(summary)
    }

    /// All summaries whose direct peer is `user_id`
    pub async fn find_by_direct_user_id(
        &self,
        user_id: &str,
    ) -> Result<Vec<RoomSummary>, RepositoryError> {
        let mut result = self
            .db
            .query(
                "SELECT * FROM room_summary WHERE direct_user_id = $user_id \
                 ORDER BY room_id FETCH direct_user_presence",
            )
            .bind(("user_id", user_id.to_string()))
            .await?;
        let summaries: Vec<RoomSummary> = result.take(0)?;
        Ok(summaries)
    }

    pub async fn get_direct_user_presence(
        &self,
        room_id: &str,
    ) -> Result<Option<UserPresence>, RepositoryError> {
        Ok(self.get_by_room_id(room_id).await?.and_then(|summary| summary.direct_user_presence))
    }
}
