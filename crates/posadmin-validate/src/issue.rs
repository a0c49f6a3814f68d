//! Validation issue types.
//!
//! Each variant carries only the data it needs; the field name, a stable
//! machine-readable kind, and the user-facing message are derived from it.

use serde::Serialize;

/// Pipeline-level key for schedule conflicts. A conflict is a property of a
/// pair of records, so it is not attached to any single input field.
pub const TIME_OVERLAP_KEY: &str = "time_overlap";

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldIssue {
    /// A mandatory field is blank or absent.
    Required { field: &'static str },
    /// A value exceeds its maximum length.
    TooLong {
        field: &'static str,
        max: u32,
        actual: usize,
    },
    /// A code field contains characters outside A-Z and 0-9.
    NotAlphanumeric { field: &'static str },
    InvalidDecimal { field: &'static str },
    InvalidDate { field: &'static str },
    InvalidTime { field: &'static str },
    InvalidDayList { field: &'static str },
    InvalidFlag { field: &'static str },
    /// A fee/cost/price below zero.
    Negative { field: &'static str },
    /// The natural key collides with another record, case-insensitively.
    DuplicateKey { field: &'static str, value: String },
    /// A declared from/to date pair is not strictly ascending.
    DateRangeInverted {
        from_field: &'static str,
        to_field: &'static str,
    },
    /// A declared start/end time pair is not strictly ascending.
    TimeRangeInverted {
        start_field: &'static str,
        end_field: &'static str,
    },
    /// The candidate window collides with existing periods on the outlet.
    ScheduleOverlap {
        outlet: String,
        conflicting: Vec<String>,
    },
}

impl FieldIssue {
    /// The error-map key this finding is reported under.
    ///
    /// Range findings attach to the second field of the pair; schedule
    /// conflicts use the pipeline-level [`TIME_OVERLAP_KEY`].
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::NotAlphanumeric { field }
            | Self::InvalidDecimal { field }
            | Self::InvalidDate { field }
            | Self::InvalidTime { field }
            | Self::InvalidDayList { field }
            | Self::InvalidFlag { field }
            | Self::Negative { field }
            | Self::DuplicateKey { field, .. } => field,
            Self::DateRangeInverted { to_field, .. } => to_field,
            Self::TimeRangeInverted { end_field, .. } => end_field,
            Self::ScheduleOverlap { .. } => TIME_OVERLAP_KEY,
        }
    }

    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::TooLong { .. } => "too_long",
            Self::NotAlphanumeric { .. } => "not_alphanumeric",
            Self::InvalidDecimal { .. } => "invalid_decimal",
            Self::InvalidDate { .. } => "invalid_date",
            Self::InvalidTime { .. } => "invalid_time",
            Self::InvalidDayList { .. } => "invalid_day_list",
            Self::InvalidFlag { .. } => "invalid_flag",
            Self::Negative { .. } => "negative",
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::DateRangeInverted { .. } => "date_range",
            Self::TimeRangeInverted { .. } => "time_range",
            Self::ScheduleOverlap { .. } => "time_overlap",
        }
    }

    /// User-facing message, rendered inline next to the offending input.
    pub fn message(&self) -> String {
        match self {
            Self::Required { field } => format!("{field} is required"),
            Self::TooLong { field, max, actual } => {
                format!("{field} exceeds maximum length {max} ({actual} characters)")
            }
            Self::NotAlphanumeric { field } => {
                format!("{field} must contain only letters and digits")
            }
            Self::InvalidDecimal { field } => format!("{field} must be a number"),
            Self::InvalidDate { field } => {
                format!("{field} must be a date in YYYY-MM-DD format")
            }
            Self::InvalidTime { field } => format!("{field} must be a time in HH:MM format"),
            Self::InvalidDayList { field } => {
                format!("{field} must list weekdays like Mon,Tue")
            }
            Self::InvalidFlag { field } => format!("{field} must be yes or no"),
            Self::Negative { field } => format!("{field} must not be negative"),
            Self::DuplicateKey { field, value } => {
                format!("{field} {value:?} is already in use")
            }
            Self::DateRangeInverted { from_field, to_field } => {
                format!("{from_field} must be before {to_field}")
            }
            Self::TimeRangeInverted {
                start_field,
                end_field,
            } => format!("{start_field} must be before {end_field}"),
            Self::ScheduleOverlap {
                outlet,
                conflicting,
            } => format!(
                "time window overlaps {} for outlet {}",
                conflicting.join(", "),
                outlet
            ),
        }
    }
}
