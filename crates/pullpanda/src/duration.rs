//! Compact duration tokens (`30d`, `2w`, `1mo`)

use std::time::Duration;
use thiserror::Error;

/// A duration token could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// Too short, or the value before the unit is not a non-negative integer
    #[error("invalid duration format {0:?}, expected <integer><unit> such as 7d")]
    InvalidFormat(String),

    /// The unit is none of s, m, h, d, w, mo
    #[error("invalid duration unit in {0:?}, expected one of s, m, h, d, w, mo")]
    InvalidUnit(String),

    /// The span does not fit in seconds as u64
    #[error("duration {0:?} is too large")]
    OutOfRange(String),
}

/// Units accepted after the integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    /// 30-day months
    Months,
}

impl DurationUnit {
    /// Length of one unit in seconds
    pub fn seconds(self) -> u64 {
        match self {
            DurationUnit::Seconds => 1,
            DurationUnit::Minutes => 60,
            DurationUnit::Hours => 60 * 60,
            DurationUnit::Days => 24 * 60 * 60,
            DurationUnit::Weeks => 7 * 24 * 60 * 60,
            DurationUnit::Months => 30 * 24 * 60 * 60,
        }
    }

    fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            's' => Some(DurationUnit::Seconds),
            'm' => Some(DurationUnit::Minutes),
            'h' => Some(DurationUnit::Hours),
            'd' => Some(DurationUnit::Days),
            'w' => Some(DurationUnit::Weeks),
            _ => None,
        }
    }
}

/// Parse a token of the form `<integer><unit>`
///
/// `mo` is matched before `m`, so `5mo` is five 30-day months and `5m` is
/// five minutes. The integer must be non-negative: `-3d` is rejected as
/// `InvalidFormat`.
pub fn parse_duration(token: &str) -> Result<Duration, DurationError> {
    if token.chars().count() < 2 {
        return Err(DurationError::InvalidFormat(token.to_string()));
    }

    let (value, unit) = match token.strip_suffix("mo") {
        Some(value) => (value, Some(DurationUnit::Months)),
        None => {
            let mut chars = token.chars();
            let suffix = chars.next_back();
            (chars.as_str(), suffix.and_then(DurationUnit::from_suffix))
        }
    };

    let count: u64 = value
        .parse()
        .map_err(|_| DurationError::InvalidFormat(token.to_string()))?;
    let unit = unit.ok_or_else(|| DurationError::InvalidUnit(token.to_string()))?;

    count
        .checked_mul(unit.seconds())
        .map(Duration::from_secs)
        .ok_or_else(|| DurationError::OutOfRange(token.to_string()))
}
