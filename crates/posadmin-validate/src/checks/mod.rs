//! Check families, one module per concern. Each is a pure function from
//! `(schema, form, context)` to a list of findings.

pub mod format;
pub mod presence;
pub mod range;
pub mod schedule;
pub mod unique;
