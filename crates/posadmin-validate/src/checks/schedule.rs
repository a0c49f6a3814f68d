//! Cross-record schedule conflicts for business periods.

use posadmin_engine::overlaps;
use posadmin_model::{BusinessPeriod, FormValues};

use crate::FieldIssue;
use crate::pipeline::ValidationContext;

/// Flag the candidate window when it collides with existing periods.
///
/// Rows (candidate or existing) that do not parse into a well-formed period
/// are skipped: the field-level checks already reported them, and the
/// overlap math requires ordered time intervals.
pub fn check(form: &FormValues, ctx: &ValidationContext<'_>) -> Vec<FieldIssue> {
    let Ok(candidate) = BusinessPeriod::from_values(form) else {
        return Vec::new();
    };

    let mut conflicting = Vec::new();
    for (index, record) in ctx.existing.iter().enumerate() {
        if Some(index) == ctx.selected {
            continue;
        }
        let Ok(period) = BusinessPeriod::from_values(&record.values) else {
            continue;
        };
        if overlaps(&period, &candidate) {
            conflicting.push(period.period_code.to_string());
        }
    }

    if conflicting.is_empty() {
        Vec::new()
    } else {
        vec![FieldIssue::ScheduleOverlap {
            outlet: candidate.outlet_code.to_string(),
            conflicting,
        }]
    }
}
