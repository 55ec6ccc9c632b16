use chrono::{FixedOffset, NaiveTime, Timelike};
use compact_str::CompactString;

use crate::error::{Error, ErrorCode};

/// Largest timezone offset accepted for xs:time values (+/-14:00).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// A time-of-day value reduced to the fields the picture formatter reads:
/// hour, minute, whole second, exact fractional-second digits, and an
/// optional UTC offset in minutes.
///
/// The fractional second is kept as its exact decimal digit string ("456"
/// for .456) so formatting never goes through binary floating point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
    second: u8,
    fraction: Option<CompactString>,
    offset_minutes: Option<i32>,
}

impl TimeValue {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::from_code(
                ErrorCode::FORG0001,
                format!("invalid time components {hour}:{minute}:{second}"),
            ));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            fraction: None,
            offset_minutes: None,
        })
    }

    /// Attaches the exact fractional-second digit string (e.g. "456" for .456).
    pub fn with_fraction(mut self, digits: &str) -> Result<Self, Error> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::from_code(
                ErrorCode::FORG0001,
                format!("invalid fractional-second digits: {digits:?}"),
            ));
        }
        self.fraction = Some(CompactString::new(digits));
        Ok(self)
    }

    /// Attaches a timezone offset in minutes east of UTC.
    pub fn with_offset_minutes(mut self, minutes: i32) -> Result<Self, Error> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(Error::from_code(
                ErrorCode::FORG0001,
                format!("timezone offset out of range: {minutes} minutes"),
            ));
        }
        self.offset_minutes = Some(minutes);
        Ok(self)
    }

    /// Builds a value from the chrono representation of an xs:time.
    /// The fraction digits are derived from the sub-second nanoseconds with
    /// trailing zeros trimmed, so .456 yields "456" rather than "456000000".
    pub fn from_chrono(time: NaiveTime, tz: Option<FixedOffset>) -> Self {
        // nanosecond() reports values >= 1_000_000_000 during leap seconds
        let nanos = time.nanosecond() % 1_000_000_000;
        let fraction = if nanos == 0 {
            None
        } else {
            let mut digits = CompactString::new(format!("{nanos:09}"));
            while digits.ends_with('0') {
                digits.pop();
            }
            Some(digits)
        };
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            fraction,
            offset_minutes: tz.map(|o| o.local_minus_utc() / 60),
        }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }

    /// Exact decimal expansion of the fractional second, if any.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    pub fn offset_minutes(&self) -> Option<i32> {
        self.offset_minutes
    }
}
