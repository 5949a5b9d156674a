use crate::migration;
use crate::repository::{RepositoryError, RoomSummaryRepository};
use cirrus_entity::RoomSummary;
use surrealdb::{Surreal, engine::any::Any};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TestUtilsError {
    #[error("Database connection failed: {0}")]
    DatabaseConnection(#[from] surrealdb::Error),

    #[error("Schema initialization failed: {0}")]
    SchemaInitialization(RepositoryError),

    #[error("Seeding test data failed: {0}")]
    Seed(RepositoryError),
}

/// Isolated in-memory database with the full schema applied
pub struct TestDatabase {
    pub db: Surreal<Any>,
    pub database_name: String,
    pub namespace: String,
}

impl TestDatabase {
    pub async fn new() -> Result<Self, TestUtilsError> {
        // Unique names keep tests apart even when they share a datastore
        let database_name = format!("test_db_{}", Uuid::new_v4().simple());
        let namespace = format!("test_ns_{}", Uuid::new_v4().simple());

        let db = surrealdb::engine::any::connect("mem://").await?;
        db.use_ns(&namespace).use_db(&database_name).await?;

        migration::apply_schema(&db).await.map_err(TestUtilsError::SchemaInitialization)?;

        Ok(TestDatabase { db, database_name, namespace })
    }

    /// Seed one direct room per `(room_id, peer_user_id)` pair
    pub async fn seed_direct_rooms(&self, rooms: &[(&str, &str)]) -> Result<(), TestUtilsError> {
        let repository = RoomSummaryRepository::new(self.db.clone());
        for (room_id, user_id) in rooms {
            repository
                .upsert(&RoomSummary::direct(*room_id, *user_id))
                .await
                .map_err(TestUtilsError::Seed)?;
        }
        Ok(())
    }
}

/// Create test database with full schema and isolation
pub async fn create_test_database() -> Result<TestDatabase, TestUtilsError> {
    TestDatabase::new().await
}
