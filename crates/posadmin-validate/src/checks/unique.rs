//! Natural-key uniqueness.
//!
//! An explicit linear scan with index exclusion, not a set lookup: the
//! "skip the currently selected record" rule is the point, and it is easy
//! to lose inside a map-based check.

use posadmin_model::{EntityKind, FormValues, RecordSchema, fields, parse};

use crate::FieldIssue;
use crate::pipeline::ValidationContext;

pub fn check(
    schema: &RecordSchema,
    form: &FormValues,
    ctx: &ValidationContext<'_>,
) -> Vec<FieldIssue> {
    let Some(candidate_key) = form.trimmed(schema.key_field) else {
        return Vec::new();
    };

    // Versioned entities key on (code, effective date): revisions share a
    // code on purpose, but two revisions dated the same day are duplicates.
    let candidate_effective = if schema.kind == EntityKind::Versioned {
        match form
            .trimmed(fields::EFFECTIVE_FROM)
            .map(|raw| parse::parse_date(fields::EFFECTIVE_FROM, raw))
        {
            Some(Ok(date)) => Some(date),
            // Missing or malformed effective date: presence/format checks
            // own that finding, and no duplicate can be established.
            Some(Err(_)) | None => return Vec::new(),
        }
    } else {
        None
    };

    for (index, record) in ctx.existing.iter().enumerate() {
        if Some(index) == ctx.selected {
            continue;
        }
        let Some(key) = record.field(schema.key_field) else {
            continue;
        };
        if !key.eq_ignore_ascii_case(candidate_key) {
            continue;
        }
        if let Some(candidate_date) = candidate_effective {
            let existing_date = record
                .field(fields::EFFECTIVE_FROM)
                .and_then(|raw| parse::parse_date(fields::EFFECTIVE_FROM, raw).ok());
            if existing_date != Some(candidate_date) {
                continue;
            }
        }
        return vec![FieldIssue::DuplicateKey {
            field: schema.key_field,
            value: candidate_key.to_ascii_uppercase(),
        }];
    }

    Vec::new()
}
