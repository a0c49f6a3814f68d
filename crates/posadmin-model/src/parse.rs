//! Parsing helpers for raw form values.
//!
//! Every helper takes the owning field name so errors can point back at the
//! input that failed. The validation pipeline and the typed views share
//! these, keeping their accept/reject behavior identical.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::DaySet;
use crate::error::ModelError;

/// Calendar date, `YYYY-MM-DD`.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ModelError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Time of day, `HH:MM` with an optional seconds component.
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime, ModelError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ModelError::InvalidTime {
            field,
            value: value.to_string(),
        })
}

/// Comma-separated list of English day names ("Mon,Tue" or "monday,tuesday").
pub fn parse_days(field: &'static str, value: &str) -> Result<DaySet, ModelError> {
    let mut set = DaySet::empty();
    for token in value.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let day: Weekday = token.parse().map_err(|_| ModelError::InvalidDays {
            field,
            value: value.to_string(),
        })?;
        set.insert(day);
    }
    if set.is_empty() {
        return Err(ModelError::InvalidDays {
            field,
            value: value.to_string(),
        });
    }
    Ok(set)
}

/// Boolean flag; accepts the spellings the admin forms produced.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool, ModelError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(ModelError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_accept_optional_seconds() {
        assert_eq!(
            parse_time("start_time", "09:00").expect("short form"),
            parse_time("start_time", "09:00:00").expect("long form"),
        );
        assert!(parse_time("start_time", "9am").is_err());
    }

    #[test]
    fn day_lists_reject_unknown_names_and_empty_sets() {
        assert_eq!(parse_days("days", "Mon, tue").expect("two days").len(), 2);
        assert!(parse_days("days", "Mon,Funday").is_err());
        assert!(parse_days("days", " , ").is_err());
    }
}
