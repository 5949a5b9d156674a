use crate::repository::error::RepositoryError;
use surrealdb::{Surreal, engine::any::Any};

#[derive(Clone)]
pub struct SyncStateRepository {
    db: Surreal<Any>,
}

impl SyncStateRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Token saved by the last committed sync cycle
    pub async fn get_next_batch(&self) -> Result<Option<String>, RepositoryError> {
        let mut result = self.db.query("SELECT VALUE next_batch FROM sync_state:current").await?;
        let tokens: Vec<String> = result.take(0)?;
        Ok(tokens.into_iter().next())
    }
}
