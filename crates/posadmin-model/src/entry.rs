//! Dated configuration revisions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::{Code, StoredRecord, fields, parse};

/// One revision of a dated configuration entity.
///
/// Multiple entries may share a `code` with different `effective_from`
/// dates; resolution picks the revision with the greatest `effective_from`
/// not exceeding the evaluation date. `created_at` comes from the stored
/// record and breaks ties between revisions dated the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedEntry {
    pub code: Code,
    pub effective_from: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Remaining form fields, carried opaquely.
    pub payload: serde_json::Value,
}

impl VersionedEntry {
    /// Parse the typed view out of a stored record.
    pub fn from_record(record: &StoredRecord) -> Result<Self, ModelError> {
        let code = record
            .field(fields::CODE)
            .ok_or(ModelError::MissingField(fields::CODE))?;
        let effective_raw = record
            .field(fields::EFFECTIVE_FROM)
            .ok_or(ModelError::MissingField(fields::EFFECTIVE_FROM))?;

        let mut payload = serde_json::Map::new();
        for (field, value) in record.values.iter() {
            if field == fields::CODE || field == fields::EFFECTIVE_FROM {
                continue;
            }
            payload.insert(field.to_string(), serde_json::Value::from(value));
        }

        Ok(Self {
            code: Code::new(code)?,
            effective_from: parse::parse_date(fields::EFFECTIVE_FROM, effective_raw)?,
            created_at: record.created_at,
            payload: serde_json::Value::Object(payload),
        })
    }
}
