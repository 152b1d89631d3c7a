use std::ops::Sub;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("invalid timestamp format: {value:?} (expected HH:MM)")]
    InvalidTimestampFormat { value: String },
    #[error("{minutes} minutes is past the end of the day")]
    OutOfRange { minutes: u32 },
}

/// Wall-clock time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Time(u32);

impl Time {
    const MINUTES_PER_DAY: u32 = 24 * 60;

    pub fn from_minutes(minutes: u32) -> Result<Time, TimeError> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(TimeError::OutOfRange { minutes });
        }
        Ok(Time(minutes))
    }

    pub fn parse(value: &str) -> Result<Time, TimeError> {
        let invalid = || TimeError::InvalidTimestampFormat {
            value: value.to_string(),
        };

        let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
        let hours = parse_field(hours, 23).ok_or_else(invalid)?;
        let minutes = parse_field(minutes, 59).ok_or_else(invalid)?;
        Time::from_minutes(hours * 60 + minutes)
    }

    pub fn hours(&self) -> u32 {
        self.0 / 60
    }

    pub fn minutes(&self) -> u32 {
        self.0 % 60
    }
}

fn parse_field(field: &str, max: u32) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|v| *v <= max)
}

impl FromStr for Time {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

/// Signed difference in minutes. Clock times carry no date, so an arrival
/// earlier in the day than the departure comes out negative.
impl Sub<Time> for Time {
    type Output = i64;

    fn sub(self, rhs: Time) -> Self::Output {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

/// Minutes elapsed between two `HH:MM` timestamps.
pub fn duration(departure: &str, arrival: &str) -> Result<i64, TimeError> {
    let departure = Time::parse(departure)?;
    let arrival = Time::parse(arrival)?;
    Ok(arrival - departure)
}

pub fn format_duration(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let abs = minutes.unsigned_abs();
    format!("{}{}h {:02}m", sign, abs / 60, abs % 60)
}
