use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid code: {0:?}")]
    InvalidCode(String),
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid time in {field}: {value:?}")]
    InvalidTime { field: &'static str, value: String },
    #[error("invalid day list in {field}: {value:?}")]
    InvalidDays { field: &'static str, value: String },
    #[error("invalid flag in {field}: {value:?}")]
    InvalidFlag { field: &'static str, value: String },
    #[error("start time {start} is not before end time {end}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },
}

pub type Result<T> = std::result::Result<T, ModelError>;
