mod clock;
mod codec;
mod consts;
mod delta;
mod earth;
mod types;

pub use clock::{ClockTime, TimeConvention, hms_to_millis, millis_to_hms};
pub use codec::{forward, reverse};
pub use consts::*;
pub use delta::{DeltaError, add_delta, timedelta};
pub use earth::{EarthError, MarsClock, parse_earth};
pub use types::{Month, Sol, Weekday, Year, month_lengths, sols_in_month};

use derive_more::Display;
use std::fmt;
use std::str::FromStr;

/// A point in time on the Mars calendar: year, month, sol and clock reading.
///
/// Ordering follows the calendar, provided both values were produced with the
/// same `TimeConvention`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarsDateTime {
    year:  Year,
    month: Month,
    sol:   Sol,
    time:  ClockTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid timestamp format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be non-zero, at most {} either side of the epoch)", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid sol {sol} for month {year}-{month:02}")]
    InvalidSol { year: i64, month: u8, sol: u8 },
    #[display(fmt = "Invalid time of day: {_0}")]
    InvalidTime(String),
    #[display(fmt = "Invalid weekday: {_0}")]
    InvalidWeekday(String),
    #[display(fmt = "Empty timestamp string")]
    EmptyInput,
    #[display(fmt = "Timestamp outside the i64 millisecond range: {_0}")]
    OutOfRange(String),
}

impl std::error::Error for ParseError {}

impl MarsDateTime {
    /// Creates a timestamp from validated components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSol` if `sol` does not exist in that month of that year.
    pub fn new(year: Year, month: Month, sol: Sol, time: ClockTime) -> Result<Self, ParseError> {
        let sol = Sol::new(sol.get(), year, month)?;
        Ok(Self::from_fields(year, month, sol, time))
    }

    /// Creates a timestamp from raw components: (year, month, sol, clock reading)
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_parts(year: i64, month: u8, sol: u8, time: ClockTime) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let sol = Sol::new(sol, year, month)?;
        Ok(Self::from_fields(year, month, sol, time))
    }

    pub(crate) const fn from_fields(year: Year, month: Month, sol: Sol, time: ClockTime) -> Self {
        Self {
            year,
            month,
            sol,
            time,
        }
    }

    /// Timestamp of `millis` milliseconds since the epoch
    pub fn from_millis(millis: i64, convention: TimeConvention) -> Self {
        codec::forward(millis, convention)
    }

    /// Milliseconds since the epoch, negative before it
    ///
    /// # Errors
    /// Returns `ParseError::InvalidTime` if the clock reading does not exist in
    /// `convention`, or `ParseError::OutOfRange` past the `i64` range.
    pub fn to_millis(&self, convention: TimeConvention) -> Result<i64, ParseError> {
        codec::reverse(self, convention)
    }

    /// Converts to raw components: (year, month, sol, clock reading)
    pub const fn to_parts(&self) -> (i64, u8, u8, ClockTime) {
        (self.year.get(), self.month.get(), self.sol.get(), self.time)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn sol(&self) -> Sol {
        self.sol
    }

    pub const fn time(&self) -> ClockTime {
        self.time
    }

    /// Weekday, derived from the sol of the month
    pub const fn weekday(&self) -> Weekday {
        self.sol.weekday()
    }
}

impl fmt::Display for MarsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year.is_before_epoch() {
            write!(f, "{DATE_SEPARATOR}")?;
        }
        write!(
            f,
            "{:04}-{:02}-{:02} {}, {}",
            self.year.get().unsigned_abs(),
            self.month.get(),
            self.sol.get(),
            self.time,
            self.weekday()
        )
    }
}

impl FromStr for MarsDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // The weekday must be a real name but is never checked against the date
        let stamp = match trimmed.split_once(WEEKDAY_SEPARATOR) {
            Some((stamp, weekday)) => {
                weekday.parse::<Weekday>()?;
                stamp
            },
            None => trimmed,
        };

        let parts: Vec<&str> = stamp.split_whitespace().collect();
        let [date, time] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected date and time separated by whitespace, found {} fields",
                parts.len()
            )));
        };

        let (year, month, sol) = Self::parse_date(date)?;
        let time = Self::parse_time(time)?;
        Ok(Self::from_fields(year, month, sol, time))
    }
}

impl MarsDateTime {
    /// Helper to parse an unsigned decimal field with better error messages
    fn parse_number<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_date(s: &str) -> Result<(Year, Month, Sol), ParseError> {
        let (before_epoch, digits) = match s.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let parts: Vec<&str> = digits.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}sol, found {s}"
            )));
        }

        let magnitude = Self::parse_number::<i64>(parts[0])?;
        let year = Year::new(if before_epoch { -magnitude } else { magnitude })?;
        let month = Month::new(Self::parse_number::<u8>(parts[1])?)?;
        let sol = Sol::new(Self::parse_number::<u8>(parts[2])?, year, month)?;

        Ok((year, month, sol))
    }

    fn parse_time(s: &str) -> Result<ClockTime, ParseError> {
        let (clock, fraction) = match s.split_once(FRACTION_SEPARATOR) {
            Some((clock, fraction)) => (clock, Some(fraction)),
            None => (s, None),
        };

        let parts: Vec<&str> = clock.split(TIME_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidTime(s.to_owned()));
        }

        let hour = Self::parse_number::<u8>(parts[0])?;
        let minute = Self::parse_number::<u8>(parts[1])?;
        let second = Self::parse_number::<u8>(parts[2])?;
        let millisecond = match fraction {
            Some(digits) => Self::parse_fraction(digits, s)?,
            None => 0,
        };

        ClockTime::new(hour, minute, second, millisecond)
    }

    /// Fraction of a second with 1 to 3 digits, in milliseconds
    fn parse_fraction(digits: &str, token: &str) -> Result<u16, ParseError> {
        if digits.is_empty() || digits.len() > 3 {
            return Err(ParseError::InvalidTime(token.to_owned()));
        }
        let value = Self::parse_number::<u16>(digits)?;
        let scale = match digits.len() {
            1 => 100,
            2 => 10,
            _ => 1,
        };
        Ok(value * scale)
    }
}

impl serde::Serialize for MarsDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MarsDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
