//! Values coming from the presentation layer can either be already parsed or still be raw text.
//! Both variants end up in the same canonical string form before they are stored.

use chrono::{NaiveDate, NaiveTime};

use crate::utils::time::{parse_day, parse_input_time, truncate_to_seconds};

use super::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeInput {
    Structured(NaiveTime),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayInput {
    Structured(NaiveDate),
    Text(String),
}

impl TimeInput {
    /// Resolves the input into a time with whole seconds. `field` is only used for the error
    /// message.
    pub fn resolve(&self, field: &'static str) -> Result<NaiveTime, ValidationError> {
        match self {
            TimeInput::Structured(time) => Ok(truncate_to_seconds(*time)),
            TimeInput::Text(value) => parse_input_time(value)
                .map(truncate_to_seconds)
                .map_err(|_| ValidationError::MalformedTime {
                    field,
                    value: value.clone(),
                }),
        }
    }
}

impl DayInput {
    pub fn resolve(&self) -> Result<NaiveDate, ValidationError> {
        match self {
            DayInput::Structured(date) => Ok(*date),
            DayInput::Text(value) => parse_day(value).map_err(|_| ValidationError::MalformedDay {
                value: value.clone(),
            }),
        }
    }
}

impl From<NaiveTime> for TimeInput {
    fn from(value: NaiveTime) -> Self {
        TimeInput::Structured(value)
    }
}

impl From<&str> for TimeInput {
    fn from(value: &str) -> Self {
        TimeInput::Text(value.to_owned())
    }
}

impl From<NaiveDate> for DayInput {
    fn from(value: NaiveDate) -> Self {
        DayInput::Structured(value)
    }
}

impl From<&str> for DayInput {
    fn from(value: &str) -> Self {
        DayInput::Text(value.to_owned())
    }
}
