//! Date window applied to every search
//!
//! The window is resolved once, before any handle is fetched, and then
//! shared read-only by all tasks.

use crate::duration::{parse_duration, DurationError};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;
use thiserror::Error;

/// Date format GitHub search qualifiers expect
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The date flags could not be turned into a window
#[derive(Debug, Error)]
pub enum WindowError {
    #[error("invalid {flag} {value:?}, expected YYYY-MM-DD")]
    InvalidDate {
        flag: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("duration {0:?} reaches before the earliest representable date")]
    OutOfRange(String),

    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

/// Inclusive creation/merge date bounds for the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// Resolve the command line date flags relative to `now`
    ///
    /// A `duration` overrides `start_date`: the start becomes the calendar
    /// date of `now - duration`.
    pub fn resolve(
        start_date: Option<&str>,
        end_date: Option<&str>,
        duration: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Self, WindowError> {
        let mut start = start_date
            .map(|value| parse_date("--start-date", value))
            .transpose()?;
        let end = end_date
            .map(|value| parse_date("--end-date", value))
            .transpose()?;

        if let Some(token) = duration {
            let span = parse_duration(token)?;
            let since = TimeDelta::from_std(span)
                .ok()
                .and_then(|delta| now.checked_sub_signed(delta))
                .ok_or_else(|| WindowError::OutOfRange(token.to_string()))?;

            if start.is_some() {
                log::debug!("--duration {} overrides --start-date", token);
            }
            start = Some(since.date());
        }

        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(WindowError::StartAfterEnd { start, end });
            }
        }

        Ok(Self { start, end })
    }

    /// Whether neither bound is set
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |date: Option<NaiveDate>| {
            date.map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "*".to_string())
        };
        write!(f, "{}..{}", bound(self.start), bound(self.end))
    }
}

fn parse_date(flag: &'static str, value: &str) -> Result<NaiveDate, WindowError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| WindowError::InvalidDate {
        flag,
        value: value.to_string(),
        source,
    })
}
