//! The storage contract the lifecycle controller commits through.

use chrono::{DateTime, Utc};
use posadmin_model::{FormValues, RecordId, StoredRecord};
use thiserror::Error;

/// Repository operation error.
///
/// Repository failures are retryable from the user's point of view: the
/// controller keeps the working form intact so a save can be re-attempted
/// without re-entering data.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The record disappeared underneath the session.
    #[error("record {id} not found")]
    NotFound { id: RecordId },

    /// The backing store failed (I/O, serialization, transport).
    #[error("failed to {operation} record store")]
    Storage {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Supplies the record set and accepts create/update/delete calls.
///
/// `now` is always passed in by the caller; implementations never read the
/// system clock, so persistence stays deterministic under test.
pub trait RecordRepository {
    fn list(&self) -> Result<Vec<StoredRecord>, RepositoryError>;

    /// Persist a new record and return it with its assigned identity.
    fn create(
        &mut self,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError>;

    /// Replace an existing record's values, preserving `created_at`.
    fn update(
        &mut self,
        id: RecordId,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError>;

    fn delete(&mut self, id: RecordId) -> Result<(), RepositoryError>;
}
