//! Record schemas: per-entity field metadata that drives validation.
//!
//! The admin screens are near-identical forms over different field sets, so
//! the field rules live in data rather than in per-form code. A schema names
//! the entity, its natural-key field, the field specs, and any declared
//! date/time range pairs.

use serde::{Deserialize, Serialize};

/// How a raw field value is interpreted and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text, length-limited only.
    Text,
    /// Alphanumeric natural-key material, uppercase-normalized.
    Code,
    /// Numeric with optional decimal part.
    Decimal,
    /// Calendar date, `YYYY-MM-DD`.
    Date,
    /// Time of day, `HH:MM`.
    Time,
    /// Comma-separated weekday names.
    DayList,
    /// Boolean flag.
    Flag,
}

/// Validation metadata for one form field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub max_length: Option<u32>,
    /// Only meaningful for [`FieldKind::Decimal`]: reject values below zero.
    pub non_negative: bool,
}

impl FieldSpec {
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            max_length: None,
            non_negative: false,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn code(name: &'static str) -> Self {
        Self::new(name, FieldKind::Code)
    }

    pub fn decimal(name: &'static str) -> Self {
        Self::new(name, FieldKind::Decimal)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn time(name: &'static str) -> Self {
        Self::new(name, FieldKind::Time)
    }

    pub fn day_list(name: &'static str) -> Self {
        Self::new(name, FieldKind::DayList)
    }

    pub fn flag(name: &'static str) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn max_length(mut self, limit: u32) -> Self {
        self.max_length = Some(limit);
        self
    }

    #[must_use]
    pub fn non_negative(mut self) -> Self {
        self.non_negative = true;
        self
    }
}

/// Which cross-record behavior an entity participates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Key uniqueness only.
    Plain,
    /// Dated revisions resolved by effective date; key may repeat across
    /// revisions.
    Versioned,
    /// Recurring time windows checked for schedule conflicts.
    Schedule,
}

/// Field metadata for one entity family.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    pub entity: &'static str,
    pub kind: EntityKind,
    /// The natural-key field checked for case-insensitive uniqueness.
    pub key_field: &'static str,
    pub fields: Vec<FieldSpec>,
    /// Declared `(from, to)` date pair; `from` must be strictly earlier.
    pub date_range: Option<(&'static str, &'static str)>,
    /// Declared `(start, end)` time pair; `start` must be strictly earlier.
    pub time_range: Option<(&'static str, &'static str)>,
}

impl RecordSchema {
    pub fn new(
        entity: &'static str,
        kind: EntityKind,
        key_field: &'static str,
        fields: Vec<FieldSpec>,
    ) -> Self {
        Self {
            entity,
            kind,
            key_field,
            fields,
            date_range: None,
            time_range: None,
        }
    }

    #[must_use]
    pub fn with_date_range(mut self, from: &'static str, to: &'static str) -> Self {
        self.date_range = Some((from, to));
        self
    }

    #[must_use]
    pub fn with_time_range(mut self, start: &'static str, end: &'static str) -> Self {
        self.time_range = Some((start, end));
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }
}
