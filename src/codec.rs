//! Conversion between linear time and Mars calendar fields.
//!
//! Instants at or after the epoch are located by walking the calendar tables
//! forward from the start of their cycle. Instants before the epoch are located
//! by walking backward from the end of the cycle that precedes them, so the
//! last sol of year -1 ends exactly at the epoch.

use crate::clock::TimeConvention;
use crate::consts::{CYCLE_LENGTH_MS, CYCLE_YEARS, SOL_LENGTH, YEAR_CYCLE};
use crate::types::{Month, Sol, Year, month_lengths};
use crate::{MarsDateTime, ParseError};

/// Which end of a period a residual is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Residual counts up from the start of the period; a residual equal to a
    /// whole element belongs to the next element.
    Ascending,
    /// Residual counts down from the end of the period; a residual equal to a
    /// whole element still belongs to that element.
    Descending,
}

/// Locates `residual` within consecutive elements of `lengths[i] * unit` milliseconds.
///
/// Returns the index of the element containing the residual and what is left
/// of the residual inside it, measured from the same end as the input.
fn walk<T: Copy + Into<i64>>(lengths: &[T], mut residual: i64, unit: i64, direction: Direction) -> (usize, i64) {
    let last = lengths.len() - 1;
    match direction {
        Direction::Ascending => {
            for (index, &length) in lengths.iter().enumerate() {
                let span = length.into() * unit;
                if index == last || residual < span {
                    return (index, residual);
                }
                residual -= span;
            }
        },
        Direction::Descending => {
            for (index, &length) in lengths.iter().enumerate().rev() {
                let span = length.into() * unit;
                if index == 0 || residual <= span {
                    return (index, residual);
                }
                residual -= span;
            }
        },
    }
    (last, residual)
}

/// Total of the elements on the near side of `index`, in `unit` milliseconds.
///
/// Ascending sums the elements before `index`, Descending the ones after it.
fn elapsed<T: Copy + Into<i64>>(lengths: &[T], index: usize, unit: i64, direction: Direction) -> i64 {
    let passed = match direction {
        Direction::Ascending => &lengths[..index],
        Direction::Descending => &lengths[index + 1..],
    };
    passed.iter().map(|&length| length.into()).sum::<i64>() * unit
}

/// Converts milliseconds since the epoch into a Mars calendar timestamp.
///
/// The clock reading uses `convention`; the same convention must be passed to
/// `reverse` to get the instant back.
pub fn forward(millis: i64, convention: TimeConvention) -> MarsDateTime {
    if millis >= 0 {
        forward_after_epoch(millis, convention)
    } else {
        forward_before_epoch(millis, convention)
    }
}

fn forward_after_epoch(millis: i64, convention: TimeConvention) -> MarsDateTime {
    let cycles = millis / CYCLE_LENGTH_MS;
    let residual = millis % CYCLE_LENGTH_MS;

    let (year_index, residual) = walk(&YEAR_CYCLE, residual, SOL_LENGTH, Direction::Ascending);
    let months = month_lengths(YEAR_CYCLE[year_index]);
    let (month_index, residual) = walk(months, residual, SOL_LENGTH, Direction::Ascending);

    let sol_index = residual / SOL_LENGTH;
    let sol_millis = residual % SOL_LENGTH;

    let year = Year::from_elapsed(cycles * CYCLE_YEARS as i64 + year_index as i64, false);
    MarsDateTime::from_fields(
        year,
        Month::from_index(month_index),
        Sol::from_index(sol_index),
        convention.to_clock(sol_millis),
    )
}

fn forward_before_epoch(millis: i64, convention: TimeConvention) -> MarsDateTime {
    debug_assert!(millis < 0);

    // Distance to the epoch less one, so that i64::MIN does not overflow.
    // residual ends up in (0, CYCLE_LENGTH_MS]
    let short = -(millis + 1);
    let cycles = short / CYCLE_LENGTH_MS;
    let residual = short % CYCLE_LENGTH_MS + 1;

    let (year_index, residual) = walk(&YEAR_CYCLE, residual, SOL_LENGTH, Direction::Descending);
    let months = month_lengths(YEAR_CYCLE[year_index]);
    let (month_index, residual) = walk(months, residual, SOL_LENGTH, Direction::Descending);

    let sols_after = (residual - 1) / SOL_LENGTH;
    let until_midnight = residual - sols_after * SOL_LENGTH;
    let sol_index = i64::from(months[month_index]) - 1 - sols_after;

    let years_after = (CYCLE_YEARS - 1 - year_index) as i64;
    let year = Year::from_elapsed(cycles * CYCLE_YEARS as i64 + years_after, true);
    MarsDateTime::from_fields(
        year,
        Month::from_index(month_index),
        Sol::from_index(sol_index),
        convention.to_clock(SOL_LENGTH - until_midnight),
    )
}

/// Converts a Mars calendar timestamp back into milliseconds since the epoch.
///
/// `convention` must be the one the clock reading was written in. A reading
/// that does not exist on that clock is an error; any other mix-up of
/// conventions gives a meaningless result rather than an error.
///
/// # Errors
/// Returns `ParseError::InvalidTime` if the clock reading is past the end of a
/// sol in `convention`, or `ParseError::OutOfRange` if the instant does not fit
/// in an `i64` millisecond offset.
pub fn reverse(timestamp: &MarsDateTime, convention: TimeConvention) -> Result<i64, ParseError> {
    let year = timestamp.year();
    let cycles = year.elapsed() / CYCLE_YEARS as i64;
    let year_index = year.cycle_index();
    let months = month_lengths(YEAR_CYCLE[year_index]);
    let month_index = timestamp.month().index();
    let sol = i64::from(timestamp.sol().get());
    let sol_millis = convention.to_millis(timestamp.time())?;
    let whole_cycles = cycles.checked_mul(CYCLE_LENGTH_MS);

    let millis = if year.is_before_epoch() {
        // One short of the distance to the epoch, so that i64::MIN is reachable
        let within_cycle = elapsed(&YEAR_CYCLE, year_index, SOL_LENGTH, Direction::Descending)
            + elapsed(months, month_index, SOL_LENGTH, Direction::Descending)
            + (i64::from(months[month_index]) - sol) * SOL_LENGTH
            + (SOL_LENGTH - 1 - sol_millis);
        whole_cycles
            .and_then(|span| span.checked_add(within_cycle))
            .map(|short| -short - 1)
    } else {
        let within_cycle = elapsed(&YEAR_CYCLE, year_index, SOL_LENGTH, Direction::Ascending)
            + elapsed(months, month_index, SOL_LENGTH, Direction::Ascending)
            + (sol - 1) * SOL_LENGTH
            + sol_millis;
        whole_cycles.and_then(|span| span.checked_add(within_cycle))
    };
    millis.ok_or_else(|| ParseError::OutOfRange(timestamp.to_string()))
}
