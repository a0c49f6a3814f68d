//! Check orchestration.

use posadmin_model::{EntityKind, FormValues, RecordSchema, StoredRecord};

use crate::ValidationReport;
use crate::checks;

/// Cross-record context for one validation pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// The current record set, as supplied by the repository collaborator.
    pub existing: &'a [StoredRecord],
    /// Index of the record being edited in place, if any. Uniqueness and
    /// schedule checks skip this row so a record never collides with itself.
    pub selected: Option<usize>,
}

/// Validate a candidate form against its schema and the existing records.
///
/// Every applicable check family runs, with no short-circuiting, so the
/// caller gets the complete error map in one pass.
pub fn validate(
    schema: &RecordSchema,
    form: &FormValues,
    ctx: &ValidationContext<'_>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.extend(checks::presence::check(schema, form));
    report.extend(checks::format::check(schema, form));
    report.extend(checks::range::check(schema, form));
    report.extend(checks::unique::check(schema, form, ctx));
    if schema.kind == EntityKind::Schedule {
        report.extend(checks::schedule::check(form, ctx));
    }
    report
}
