use crate::repository::error::RepositoryError;
use surrealdb::{Surreal, engine::any::Any};
use tracing::debug;

/// All table definitions, concatenated from `migrations/tables` at build time
pub const SCHEMA: &str = include_str!(concat!(env!("OUT_DIR"), "/migrations.surql"));

/// Apply the table definitions; every statement is `IF NOT EXISTS`, so
/// re-running against an existing database is a no-op
pub async fn apply_schema(db: &Surreal<Any>) -> Result<(), RepositoryError> {
    debug!("Applying database schema");
    db.query(SCHEMA).await?.check()?;
    Ok(())
}
