//! JSON-backed record store.
//!
//! One document holds every entity's records. Saves go through a sibling
//! temp file followed by a rename, so a crash mid-write never leaves a
//! truncated store behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use posadmin_model::{FormValues, RecordId, RecordSchema, StoredRecord};
use posadmin_session::{RecordRepository, RepositoryError};
use serde::{Deserialize, Serialize};

/// The on-disk document, keyed by entity name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordStore {
    #[serde(default)]
    pub entities: BTreeMap<String, Vec<StoredRecord>>,
}

/// Read the store; a missing file is an empty store, not an error.
pub fn load_store(path: &Path) -> Result<RecordStore, RepositoryError> {
    if !path.exists() {
        return Ok(RecordStore::default());
    }
    let bytes = fs::read(path).map_err(|error| storage("read", error))?;
    serde_json::from_slice(&bytes).map_err(|error| storage("parse", error))
}

/// Atomically replace the store on disk.
pub fn save_store(path: &Path, store: &RecordStore) -> Result<(), RepositoryError> {
    let json =
        serde_json::to_string_pretty(store).map_err(|error| storage("serialize", error))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, format!("{json}\n")).map_err(|error| storage("write", error))?;
    fs::rename(&tmp, path).map_err(|error| storage("replace", error))?;
    Ok(())
}

fn storage(
    operation: &'static str,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
) -> RepositoryError {
    RepositoryError::Storage {
        operation,
        source: source.into(),
    }
}

/// File-backed repository for one entity.
///
/// Every mutation reads the document, applies the change, and writes it
/// back whole; record sets here are small enough that simplicity wins.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
    entity: String,
    key_field: &'static str,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>, schema: &RecordSchema) -> Self {
        Self {
            path: path.into(),
            entity: schema.entity.to_string(),
            key_field: schema.key_field,
        }
    }
}

impl RecordRepository for FileRepository {
    fn list(&self) -> Result<Vec<StoredRecord>, RepositoryError> {
        let mut store = load_store(&self.path)?;
        Ok(store.entities.remove(&self.entity).unwrap_or_default())
    }

    fn create(
        &mut self,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError> {
        let mut store = load_store(&self.path)?;
        let key = values
            .trimmed(self.key_field)
            .unwrap_or_default()
            .to_string();
        let record = StoredRecord {
            id: RecordId::derive(&self.entity, &key, now),
            created_at: now,
            updated_at: now,
            values,
        };
        store
            .entities
            .entry(self.entity.clone())
            .or_default()
            .push(record.clone());
        save_store(&self.path, &store)?;
        Ok(record)
    }

    fn update(
        &mut self,
        id: RecordId,
        values: FormValues,
        now: DateTime<Utc>,
    ) -> Result<StoredRecord, RepositoryError> {
        let mut store = load_store(&self.path)?;
        let records = store.entities.entry(self.entity.clone()).or_default();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(RepositoryError::NotFound { id })?;
        record.values = values;
        record.updated_at = now;
        let updated = record.clone();
        save_store(&self.path, &store)?;
        Ok(updated)
    }

    fn delete(&mut self, id: RecordId) -> Result<(), RepositoryError> {
        let mut store = load_store(&self.path)?;
        let records = store.entities.entry(self.entity.clone()).or_default();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Err(RepositoryError::NotFound { id });
        }
        save_store(&self.path, &store)?;
        Ok(())
    }
}
