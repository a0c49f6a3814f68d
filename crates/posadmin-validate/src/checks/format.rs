//! Per-field format and length constraints.
//!
//! Only non-blank values are inspected here; absence is the presence
//! check's concern.

use std::sync::LazyLock;

use posadmin_model::{FieldKind, FormValues, RecordSchema, parse};
use regex::Regex;

use crate::FieldIssue;

static DECIMAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("decimal pattern"));

pub fn check(schema: &RecordSchema, form: &FormValues) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for spec in &schema.fields {
        let Some(value) = form.trimmed(spec.name) else {
            continue;
        };

        if let Some(limit) = spec.max_length
            && value.chars().count() > limit as usize
        {
            issues.push(FieldIssue::TooLong {
                field: spec.name,
                max: limit,
                actual: value.chars().count(),
            });
        }

        match spec.kind {
            FieldKind::Text => {}
            FieldKind::Code => {
                // Codes are compared uppercase-normalized, so case is never
                // a format violation; anything non-alphanumeric is.
                if !value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
                    issues.push(FieldIssue::NotAlphanumeric { field: spec.name });
                }
            }
            FieldKind::Decimal => {
                if !DECIMAL_REGEX.is_match(value) {
                    issues.push(FieldIssue::InvalidDecimal { field: spec.name });
                }
            }
            FieldKind::Date => {
                if parse::parse_date(spec.name, value).is_err() {
                    issues.push(FieldIssue::InvalidDate { field: spec.name });
                }
            }
            FieldKind::Time => {
                if parse::parse_time(spec.name, value).is_err() {
                    issues.push(FieldIssue::InvalidTime { field: spec.name });
                }
            }
            FieldKind::DayList => {
                if parse::parse_days(spec.name, value).is_err() {
                    issues.push(FieldIssue::InvalidDayList { field: spec.name });
                }
            }
            FieldKind::Flag => {
                if parse::parse_flag(spec.name, value).is_err() {
                    issues.push(FieldIssue::InvalidFlag { field: spec.name });
                }
            }
        }
    }
    issues
}
