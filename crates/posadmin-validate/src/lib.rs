//! Schema-driven validation for admin form records.
//!
//! [`validate`] runs every applicable check family over a candidate form and
//! returns a [`ValidationReport`]: a collected set of typed findings that
//! renders to a field-to-message map. Reports are returned, never thrown;
//! an empty report is the sole success signal.

mod checks;
mod issue;
mod pipeline;
mod report;

pub use issue::{FieldIssue, TIME_OVERLAP_KEY};
pub use pipeline::{ValidationContext, validate};
pub use report::{ReportEntry, ValidationReport};
