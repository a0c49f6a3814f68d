//! Required-field presence.

use posadmin_model::{FormValues, RecordSchema};

use crate::FieldIssue;

/// Flag every mandatory field that is absent or blank after trimming.
pub fn check(schema: &RecordSchema, form: &FormValues) -> Vec<FieldIssue> {
    schema
        .fields
        .iter()
        .filter(|spec| spec.required && form.trimmed(spec.name).is_none())
        .map(|spec| FieldIssue::Required { field: spec.name })
        .collect()
}
