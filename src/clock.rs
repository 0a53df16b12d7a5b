//! Time-of-day readings within a sol and the two clock conventions.

use crate::ParseError;
use crate::consts::{
    MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MTC_MILLIS_PER_SOL, SOL_LENGTH,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// How a position within a sol is shown on the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeConvention {
    /// Earth seconds of 1000 ms; a sol reads up to `24:39:35.243`.
    #[default]
    #[display(fmt = "earth")]
    Earth,
    /// Mars seconds of `MARS_SECOND_LENGTH` ms; a sol reads up to `23:59:59.999`.
    #[display(fmt = "mtc")]
    Mtc,
}

impl TimeConvention {
    /// Selects the convention from the `mtc` flag used on the command line.
    pub const fn from_mtc(mtc: bool) -> Self {
        if mtc { Self::Mtc } else { Self::Earth }
    }

    /// Clock reading for `millis` milliseconds into a sol.
    pub fn to_clock(self, millis: i64) -> ClockTime {
        debug_assert!((0..SOL_LENGTH).contains(&millis));

        let reading = match self {
            Self::Earth => millis,
            Self::Mtc => rounded_div(millis * MTC_MILLIS_PER_SOL, SOL_LENGTH),
        };
        ClockTime::from_millis(reading)
    }

    /// Milliseconds into a sol shown by a clock reading.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidTime` if the reading does not exist on this
    /// clock, such as `24:00:00.000` or later in Mars seconds.
    pub fn to_millis(self, clock: ClockTime) -> Result<i64, ParseError> {
        let reading = clock.total_millis();
        if reading >= self.readings_per_sol() {
            return Err(ParseError::InvalidTime(clock.to_string()));
        }
        Ok(match self {
            Self::Earth => reading,
            Self::Mtc => rounded_div(reading * SOL_LENGTH, MTC_MILLIS_PER_SOL),
        })
    }

    /// Clock milliseconds in one sol; every reading is below this.
    pub const fn readings_per_sol(self) -> i64 {
        match self {
            Self::Earth => SOL_LENGTH,
            Self::Mtc => MTC_MILLIS_PER_SOL,
        }
    }
}

/// Half-up integer division for non-negative operands
const fn rounded_div(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Converts a clock reading to milliseconds
#[allow(clippy::cast_lossless)]
pub const fn hms_to_millis(hours: u8, minutes: u8, seconds: u8, millis: u16) -> i64 {
    hours as i64 * MILLIS_PER_HOUR
        + minutes as i64 * MILLIS_PER_MINUTE
        + seconds as i64 * MILLIS_PER_SECOND
        + millis as i64
}

/// Splits milliseconds into (hours, minutes, seconds, milliseconds)
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn millis_to_hms(millis: i64) -> (u8, u8, u8, u16) {
    let hours = millis / MILLIS_PER_HOUR;
    let rest = millis % MILLIS_PER_HOUR;
    let minutes = rest / MILLIS_PER_MINUTE;
    let rest = rest % MILLIS_PER_MINUTE;
    let seconds = rest / MILLIS_PER_SECOND;
    let millis = rest % MILLIS_PER_SECOND;
    (hours as u8, minutes as u8, seconds as u8, millis as u16)
}

/// A clock reading within one sol.
///
/// The digits belong to whichever `TimeConvention` produced them; the reading
/// itself does not record which one that was.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{:02}:{:02}:{:02}.{:03}", hour, minute, second, millisecond)]
#[serde(try_from = "RawClockTime")]
pub struct ClockTime {
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

#[derive(Deserialize)]
struct RawClockTime {
    hour:        u8,
    minute:      u8,
    second:      u8,
    millisecond: u16,
}

impl TryFrom<RawClockTime> for ClockTime {
    type Error = ParseError;

    fn try_from(raw: RawClockTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute, raw.second, raw.millisecond)
    }
}

impl ClockTime {
    /// Midnight, the first instant of a sol
    pub const MIDNIGHT: Self = Self {
        hour:        0,
        minute:      0,
        second:      0,
        millisecond: 0,
    };

    /// Creates a clock reading, validating each field and that the total stays within a sol
    ///
    /// # Errors
    /// Returns `ParseError::InvalidTime` if a field is out of range or the reading
    /// reaches `SOL_LENGTH`.
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Result<Self, ParseError> {
        let candidate = Self {
            hour,
            minute,
            second,
            millisecond,
        };
        if minute >= 60 || second >= 60 || millisecond >= 1000 || candidate.total_millis() >= SOL_LENGTH {
            return Err(ParseError::InvalidTime(candidate.to_string()));
        }
        Ok(candidate)
    }

    pub(crate) const fn from_millis(millis: i64) -> Self {
        let (hour, minute, second, millisecond) = millis_to_hms(millis);
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }

    pub const fn millisecond(self) -> u16 {
        self.millisecond
    }

    /// The reading as milliseconds on its own clock
    pub const fn total_millis(self) -> i64 {
        hms_to_millis(self.hour, self.minute, self.second, self.millisecond)
    }
}
