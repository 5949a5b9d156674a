use crate::repository::error::RepositoryError;
use cirrus_entity::{RoomSummary, UserPresence};
use serde::Serialize;
use serde_json::Value;
use surrealdb::{Surreal, engine::any::Any};
use tracing::debug;

/// Write side of the presence store as seen by sync ingestion
///
/// Implementations run inside a write transaction owned by the caller;
/// they never begin, commit or roll back on their own.
pub trait PresenceStore {
    /// Insert `presence`, or replace every field of the record already
    /// stored for `presence.user_id`. Returns the record as stored.
    fn upsert_user_presence(&mut self, presence: UserPresence) -> Result<UserPresence, RepositoryError>;

    /// Point every room summary whose direct peer is `presence.user_id` at
    /// that user's stored presence record. Must observe a preceding
    /// [`PresenceStore::upsert_user_presence`] in the same transaction.
    fn update_direct_user_presence(&mut self, presence: &UserPresence) -> Result<(), RepositoryError>;
}

/// Write transaction spanning one sync cycle
///
/// Statements are queued in call order and executed atomically by
/// [`SyncTransaction::commit`] as a single `BEGIN … COMMIT` query, so every
/// statement sees the writes of the statements queued before it. Dropping an
/// uncommitted transaction discards it.
pub struct SyncTransaction {
    db: Surreal<Any>,
    statements: Vec<String>,
    bindings: Vec<(String, Value)>,
}

impl SyncTransaction {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db, statements: Vec::new(), bindings: Vec::new() }
    }

    /// Number of queued statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    fn bind(&mut self, prefix: &str, value: impl Serialize) -> Result<String, RepositoryError> {
        let name = format!("{}_{}", prefix, self.bindings.len());
        self.bindings.push((name.clone(), serde_json::to_value(value)?));
        Ok(name)
    }

    /// Insert or replace a room summary, then resolve its presence link
    /// against whatever presence is stored for the direct peer at that point
    pub fn upsert_room_summary(&mut self, summary: &RoomSummary) -> Result<(), RepositoryError> {
        let room = self.bind("room", &summary.room_id)?;
        let content = self.bind("summary", summary)?;
        self.statements
            .push(format!("UPSERT type::thing('room_summary', ${room}) CONTENT ${content}"));

        match &summary.direct_user_id {
            Some(user_id) => {
                let user = self.bind("user", user_id)?;
                self.statements.push(format!(
                    "UPDATE type::thing('room_summary', ${room}) \
                     SET direct_user_presence = (SELECT VALUE id FROM user_presence WHERE user_id = ${user})[0]"
                ));
            },
            None => {
                self.statements.push(format!(
                    "UPDATE type::thing('room_summary', ${room}) SET direct_user_presence = NONE"
                ));
            },
        }
        Ok(())
    }

    /// Record the token the next sync request resumes from
    pub fn save_next_batch(&mut self, next_batch: &str) -> Result<(), RepositoryError> {
        let token = self.bind("next_batch", next_batch)?;
        self.statements.push(format!("UPSERT sync_state:current SET next_batch = ${token}"));
        Ok(())
    }

    /// Execute all queued statements atomically; returns how many ran
    pub async fn commit(self) -> Result<usize, RepositoryError> {
        let Self { db, statements, bindings } = self;
        if statements.is_empty() {
            debug!("Nothing to commit");
            return Ok(0);
        }

        let mut sql = String::from("BEGIN TRANSACTION;\n");
        for statement in &statements {
            sql.push_str(statement);
            sql.push_str(";\n");
        }
        sql.push_str("COMMIT TRANSACTION;");

        let mut query = db.query(sql);
        for binding in bindings {
            query = query.bind(binding);
        }
        query.await?.check()?;

        debug!("Committed sync transaction with {} statements", statements.len());
        Ok(statements.len())
    }

    /// Discard all queued statements
    pub fn rollback(self) {
        debug!("Rolled back sync transaction with {} statements", self.statements.len());
    }
}

impl PresenceStore for SyncTransaction {
    fn upsert_user_presence(&mut self, mut presence: UserPresence) -> Result<UserPresence, RepositoryError> {
        // `int` columns are i64; larger values would wrap on the way in
        presence.last_active_ago = presence.last_active_ago.filter(|ms| i64::try_from(*ms).is_ok());
        let user = self.bind("user", &presence.user_id)?;
        let content = self.bind("presence", &presence)?;
        self.statements
            .push(format!("UPSERT type::thing('user_presence', ${user}) CONTENT ${content}"));
        Ok(presence)
    }

    fn update_direct_user_presence(&mut self, presence: &UserPresence) -> Result<(), RepositoryError> {
        let user = self.bind("user", &presence.user_id)?;
        self.statements.push(format!(
            "UPDATE room_summary SET direct_user_presence = type::thing('user_presence', ${user}) \
             WHERE direct_user_id = ${user}"
        ));
        Ok(())
    }
}
