//! Ordering and sign constraints.

use posadmin_model::{FieldKind, FormValues, RecordSchema, parse};

use crate::FieldIssue;

/// Declared date/time pairs must be strictly ascending; non-negative
/// decimals must not dip below zero. Values that fail to parse are skipped
/// here; the format check has already flagged them.
pub fn check(schema: &RecordSchema, form: &FormValues) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if let Some((from_field, to_field)) = schema.date_range
        && let (Some(from_raw), Some(to_raw)) = (form.trimmed(from_field), form.trimmed(to_field))
        && let (Ok(from), Ok(to)) = (
            parse::parse_date(from_field, from_raw),
            parse::parse_date(to_field, to_raw),
        )
        && from >= to
    {
        issues.push(FieldIssue::DateRangeInverted {
            from_field,
            to_field,
        });
    }

    if let Some((start_field, end_field)) = schema.time_range
        && let (Some(start_raw), Some(end_raw)) =
            (form.trimmed(start_field), form.trimmed(end_field))
        && let (Ok(start), Ok(end)) = (
            parse::parse_time(start_field, start_raw),
            parse::parse_time(end_field, end_raw),
        )
        && start >= end
    {
        issues.push(FieldIssue::TimeRangeInverted {
            start_field,
            end_field,
        });
    }

    for spec in &schema.fields {
        if spec.kind != FieldKind::Decimal || !spec.non_negative {
            continue;
        }
        let Some(value) = form.trimmed(spec.name) else {
            continue;
        };
        if let Ok(amount) = value.parse::<f64>()
            && amount < 0.0
        {
            issues.push(FieldIssue::Negative { field: spec.name });
        }
    }

    issues
}
