//! Bridge between Earth UTC instants and Mars linear time.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tracing::trace;

use crate::{MarsDateTime, ParseError, TimeConvention};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EarthError {
    #[error("Invalid Earth datetime {input:?}: {source}")]
    InvalidEarth {
        input:  String,
        #[source]
        source: chrono::ParseError,
    },

    #[error(transparent)]
    InvalidMars(#[from] ParseError),

    #[error("{0} has no representable Earth instant")]
    OutOfRange(MarsDateTime),
}

/// Parses an RFC 3339 datetime with offset (`T` or space separated) into UTC.
///
/// # Errors
/// Returns `EarthError::InvalidEarth` if the text is not a datetime with an offset.
pub fn parse_earth(text: &str) -> Result<DateTime<Utc>, EarthError> {
    let input = text.trim();
    input
        .parse::<DateTime<FixedOffset>>()
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| EarthError::InvalidEarth {
            input: input.to_owned(),
            source,
        })
}

/// Maps Earth instants onto the Mars calendar.
///
/// `epoch` is the Earth instant at which the calendar starts,
/// `0001-01-01 00:00:00.000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarsClock {
    epoch:      DateTime<Utc>,
    convention: TimeConvention,
}

impl Default for MarsClock {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH, TimeConvention::Earth)
    }
}

impl MarsClock {
    pub const fn new(epoch: DateTime<Utc>, convention: TimeConvention) -> Self {
        Self { epoch, convention }
    }

    pub const fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    pub const fn convention(&self) -> TimeConvention {
        self.convention
    }

    /// Same epoch, different clock convention
    #[must_use]
    pub const fn with_convention(self, convention: TimeConvention) -> Self {
        Self { convention, ..self }
    }

    /// Whole milliseconds from the epoch to `instant`, rounded toward the past.
    pub fn millis_since_epoch(&self, instant: DateTime<Utc>) -> i64 {
        let delta = instant - self.epoch;
        // num_milliseconds truncates toward zero
        let millis = delta.num_milliseconds();
        if TimeDelta::try_milliseconds(millis).is_some_and(|whole| delta < whole) {
            millis - 1
        } else {
            millis
        }
    }

    pub fn to_mars(&self, instant: DateTime<Utc>) -> MarsDateTime {
        let millis = self.millis_since_epoch(instant);
        let timestamp = MarsDateTime::from_millis(millis, self.convention);
        trace!(%instant, millis, %timestamp, "earth to mars");
        timestamp
    }

    /// Earth instant of a Mars timestamp.
    ///
    /// # Errors
    /// Returns `EarthError::InvalidMars` if the clock reading does not exist in
    /// this clock's convention, or `EarthError::OutOfRange` if the instant is
    /// beyond chrono's range.
    pub fn to_earth(&self, timestamp: &MarsDateTime) -> Result<DateTime<Utc>, EarthError> {
        let millis = timestamp.to_millis(self.convention)?;
        let instant = TimeDelta::try_milliseconds(millis)
            .and_then(|offset| self.epoch.checked_add_signed(offset));
        trace!(%timestamp, millis, ?instant, "mars to earth");
        instant.ok_or(EarthError::OutOfRange(*timestamp))
    }

    /// Parses Mars timestamp text and converts it to an Earth instant.
    ///
    /// # Errors
    /// Returns `EarthError::InvalidMars` for malformed text, or the errors of
    /// [`MarsClock::to_earth`].
    pub fn parse_mars(&self, text: &str) -> Result<DateTime<Utc>, EarthError> {
        self.to_earth(&text.parse::<MarsDateTime>()?)
    }

    /// Current Mars instant according to the system clock
    pub fn now(&self) -> MarsDateTime {
        self.to_mars(Utc::now())
    }
}
