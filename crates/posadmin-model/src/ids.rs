use std::fmt;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::ModelError;

/// A natural key assigned by the user (outlet code, period code, UOM code).
///
/// Construction trims the input, rejects blank values, and normalizes to
/// ASCII uppercase so key comparisons are stable. Pattern and length limits
/// are a validation concern, not a constructor concern.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Code(String);

impl Code {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCode(value));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deterministic record identifier.
///
/// Short, fixed-size binary ID rendered as lowercase hex. Derived from the
/// owning entity, the record's natural key, and its creation instant, so the
/// same logical record always gets the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId([u8; 16]);

impl RecordId {
    pub fn derive(entity: &str, key: &str, created_at: DateTime<Utc>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(entity.as_bytes());
        hasher.update([0u8]);
        hasher.update(key.trim().to_ascii_uppercase().as_bytes());
        hasher.update([0u8]);
        hasher.update(created_at.to_rfc3339().as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        Self(out)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        if bytes.len() != 16 {
            return Err(serde::de::Error::custom("RecordId must be 16 bytes"));
        }
        let mut out = [0u8; 16];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
