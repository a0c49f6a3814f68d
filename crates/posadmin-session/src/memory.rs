//! In-memory repository, the default for tests and short-lived sessions.

use chrono::{DateTime, Utc};
use posadmin_model::{FormValues, RecordId, StoredRecord};

use crate::repository::{RecordRepository, RepositoryError};

/// Keeps one entity's records in a `Vec`, assigning identities the same way
/// durable stores do.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    entity: String,
    key_field: String,
    records: Vec<StoredRecord>,
}

impl MemoryRepository {
    pub fn new(entity: impl Into<String>, key_field: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            key_field: key_field.into(),
            records: Vec::new(),
        }
    }

    /// Seed with existing records (load-from-fixture convenience).
    #[must_use]
    pub fn with_records(mut self, records: Vec<StoredRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn records(&self) -> &[StoredRecord] {
        &self.records
    }
}

impl RecordRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<StoredRecord>, RepositoryError> {
        Ok(self.records.clone())
    }

    fn create(
        &mut self,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError> {
        let key = values
            .trimmed(&self.key_field)
            .unwrap_or_default()
            .to_string();
        let record = StoredRecord {
            id: RecordId::derive(&self.entity, &key, now),
            created_at: now,
            updated_at: now,
            values,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    fn update(
        &mut self,
        id: RecordId,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RepositoryError::NotFound { id })?;
        record.values = values;
        record.updated_at = now;
        Ok(record.clone())
    }

    fn delete(&mut self, id: RecordId) -> Result<(), RepositoryError> {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        if self.records.len() == before {
            return Err(RepositoryError::NotFound { id });
        }
        Ok(())
    }
}
