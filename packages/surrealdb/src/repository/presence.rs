use crate::repository::error::RepositoryError;
use cirrus_entity::UserPresence;
use futures_util::StreamExt;
use surrealdb::{Surreal, engine::any::Any};

/// Read access to stored presence; writes go through [`crate::SyncTransaction`]
#[derive(Clone)]
pub struct PresenceRepository {
    db: Surreal<Any>,
}

impl PresenceRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Get current user presence
    pub async fn get_user_presence(
        &self,
        user_id: &str,
    ) -> Result<Option<UserPresence>, RepositoryError> {
        let presence: Option<UserPresence> = self.db.select(("user_presence", user_id)).await?;
        Ok(presence)
    }

    /// Get presence for multiple users; users without a record are left out
    pub async fn get_multiple_user_presence(
        &self,
        user_ids: &[String],
    ) -> Result<Vec<UserPresence>, RepositoryError> {
        let query = "SELECT * FROM user_presence WHERE user_id IN $user_ids ORDER BY user_id";
        let mut result = self.db.query(query).bind(("user_ids", user_ids.to_vec())).await?;
        let presences: Vec<UserPresence> = result.take(0)?;
        Ok(presences)
    }

    pub async fn get_all(&self) -> Result<Vec<UserPresence>, RepositoryError> {
        let mut result = self.db.query("SELECT * FROM user_presence ORDER BY user_id").await?;
        let presences: Vec<UserPresence> = result.take(0)?;
        Ok(presences)
    }

    /// Subscribe to presence changes of one user using a SurrealDB live query
    pub async fn subscribe_to_user_presence(
        &self,
        user_id: &str,
    ) -> Result<
        impl futures_util::Stream<Item = Result<UserPresence, RepositoryError>>,
        RepositoryError,
    > {
        let mut response = self
            .db
            .query("LIVE SELECT * FROM user_presence WHERE user_id = $user_id")
            .bind(("user_id", user_id.to_string()))
            .await?;

        let stream = response
            .stream::<surrealdb::Notification<UserPresence>>(0)?
            .map(|notification| -> Result<UserPresence, RepositoryError> {
                Ok(notification?.data)
            });

        Ok(stream)
    }
}
