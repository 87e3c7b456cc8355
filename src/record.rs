use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FRACTIONAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of cars counted in one sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub count: u64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, count: u64) -> Self {
        Self { timestamp, count }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// ISO-8601 form without a timezone, e.g. `2021-12-01T05:30:00`.
/// A non-zero fraction is printed as six digits (microseconds); anything
/// finer is truncated.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    let format = if timestamp.nanosecond() / 1_000 == 0 {
        TIMESTAMP_FORMAT
    } else {
        FRACTIONAL_TIMESTAMP_FORMAT
    };
    timestamp.format(format).to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
