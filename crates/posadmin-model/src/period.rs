//! Business periods: named recurring time windows scoped to one outlet.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::{Code, DaySet, FormValues, fields, parse};

/// A recurring time window: active weekdays plus a start/end time of day.
///
/// `start_time < end_time` always holds; cross-midnight windows are rejected
/// at construction, so overlap math can assume ordered intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessPeriod {
    pub outlet_code: Code,
    pub period_code: Code,
    pub days: DaySet,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
}

impl BusinessPeriod {
    pub fn new(
        outlet_code: Code,
        period_code: Code,
        days: DaySet,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, ModelError> {
        if start_time >= end_time {
            return Err(ModelError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            outlet_code,
            period_code,
            days,
            start_time,
            end_time,
            is_active: true,
        })
    }

    /// Parse the typed view out of raw form values.
    ///
    /// An absent `is_active` flag defaults to active, matching the admin
    /// forms' checkbox default.
    pub fn from_values(values: &FormValues) -> Result<Self, ModelError> {
        let outlet_code = values
            .trimmed(fields::OUTLET_CODE)
            .ok_or(ModelError::MissingField(fields::OUTLET_CODE))?;
        let period_code = values
            .trimmed(fields::PERIOD_CODE)
            .ok_or(ModelError::MissingField(fields::PERIOD_CODE))?;
        let days = values
            .trimmed(fields::DAYS)
            .ok_or(ModelError::MissingField(fields::DAYS))?;
        let start = values
            .trimmed(fields::START_TIME)
            .ok_or(ModelError::MissingField(fields::START_TIME))?;
        let end = values
            .trimmed(fields::END_TIME)
            .ok_or(ModelError::MissingField(fields::END_TIME))?;

        let mut period = Self::new(
            Code::new(outlet_code)?,
            Code::new(period_code)?,
            parse::parse_days(fields::DAYS, days)?,
            parse::parse_time(fields::START_TIME, start)?,
            parse::parse_time(fields::END_TIME, end)?,
        )?;
        if let Some(flag) = values.trimmed(fields::IS_ACTIVE) {
            period.is_active = parse::parse_flag(fields::IS_ACTIVE, flag)?;
        }
        Ok(period)
    }
}
