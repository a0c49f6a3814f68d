//! Plain records: the raw form payload and its stored wrapper.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RecordId;

/// The working form: field name to raw string value.
///
/// This is the "plain record" shape the repository collaborator exchanges.
/// Typed views ([`crate::VersionedEntry`], [`crate::BusinessPeriod`]) are
/// parsed from it on demand; nothing else caches a second copy of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(field, value)` pairs; mostly a test convenience.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(field, value)| (field.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Set a field, returning whether the stored value actually changed.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let field = field.into();
        let value = value.into();
        if self.0.get(&field) == Some(&value) {
            return false;
        }
        self.0.insert(field, value);
        true
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// The trimmed value, or `None` when the field is absent or blank.
    pub fn trimmed(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A persisted record: plain values plus identity and timestamps.
///
/// Owned by the repository collaborator. `created_at` is assigned once and
/// survives edits; `updated_at` moves on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub values: FormValues,
}

impl StoredRecord {
    /// Trimmed field value, or `None` when absent/blank.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.values.trimmed(name)
    }
}
