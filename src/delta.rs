use tracing::debug;

use crate::{MarsDateTime, ParseError, TimeConvention};

/// Error type for timestamp arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeltaError {
    /// Error parsing a timestamp operand.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// The shifted instant does not fit in an `i64` millisecond offset.
    #[error("Shifting {millis} ms by {delta} ms overflows")]
    Overflow { millis: i64, delta: i64 },

    /// The difference between two instants does not fit in an `i64`.
    #[error("Difference from {start} ms to {end} ms overflows")]
    DifferenceOverflow { start: i64, end: i64 },
}

impl MarsDateTime {
    /// Signed milliseconds from `self` to `other`; positive when `other` is later.
    ///
    /// Both timestamps are read with the same `convention`.
    ///
    /// # Errors
    /// Returns `DeltaError::ParseError` if either timestamp has no offset in
    /// `convention`, or `DeltaError::DifferenceOverflow` if the difference
    /// leaves the `i64` range.
    pub fn millis_until(&self, other: &Self, convention: TimeConvention) -> Result<i64, DeltaError> {
        let start = self.to_millis(convention)?;
        let end = other.to_millis(convention)?;
        end.checked_sub(start)
            .ok_or(DeltaError::DifferenceOverflow { start, end })
    }

    /// Timestamp `delta` milliseconds after `self` (before it when negative).
    ///
    /// # Errors
    /// Returns `DeltaError::ParseError` if `self` has no offset in `convention`,
    /// or `DeltaError::Overflow` if the result leaves the `i64` millisecond range.
    pub fn checked_add_millis(&self, delta: i64, convention: TimeConvention) -> Result<Self, DeltaError> {
        let millis = self.to_millis(convention)?;
        let shifted = millis
            .checked_add(delta)
            .ok_or(DeltaError::Overflow { millis, delta })?;
        Ok(Self::from_millis(shifted, convention))
    }
}

/// Milliseconds between two timestamp strings, `end - start`.
///
/// Both strings must have been written in `convention`; if they were not, the
/// result is meaningless and no error is raised.
///
/// # Errors
/// Returns `DeltaError::ParseError` if either string is malformed or names a
/// clock reading that `convention` does not have, or
/// `DeltaError::DifferenceOverflow` if the difference leaves the `i64` range.
pub fn timedelta(start: &str, end: &str, convention: TimeConvention) -> Result<i64, DeltaError> {
    let from = start.parse::<MarsDateTime>()?;
    let to = end.parse::<MarsDateTime>()?;
    let delta = from.millis_until(&to, convention)?;
    debug!(%from, %to, delta, %convention, "computed timedelta");
    Ok(delta)
}

/// Shifts a timestamp string by `delta` milliseconds and renders the result.
///
/// # Errors
/// Returns `DeltaError::ParseError` if the string is malformed or names a
/// clock reading that `convention` does not have, or `DeltaError::Overflow`
/// if the result leaves the `i64` millisecond range.
pub fn add_delta(timestamp: &str, delta: i64, convention: TimeConvention) -> Result<String, DeltaError> {
    let from = timestamp.parse::<MarsDateTime>()?;
    let to = from.checked_add_millis(delta, convention)?;
    debug!(%from, %to, delta, %convention, "applied delta");
    Ok(to.to_string())
}
