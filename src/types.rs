use crate::ParseError;
use crate::consts::{
    CYCLE_YEARS, DAYS_PER_WEEK, MAX_MONTH, MAX_YEAR, MIN_SOL, MONTH_LENGTHS, SHORT_YEAR_SOLS,
    YEAR_CYCLE,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroI64;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A Mars calendar year in the range `-MAX_YEAR..=MAX_YEAR`, never 0.
/// Positive years count from the epoch (year 1 starts at the epoch),
/// negative years count backward from the instant before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(NonZeroI64);

impl Year {
    /// Creates a new Year, validating that it's non-zero and its magnitude is <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or out of range.
    pub fn new(value: i64) -> Result<Self, ParseError> {
        let non_zero = NonZeroI64::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value.unsigned_abs() > MAX_YEAR.unsigned_abs() {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Year reached after `elapsed` whole years, counted away from the epoch.
    /// Not range-checked: `forward` accepts any `i64` offset.
    pub(crate) fn from_elapsed(elapsed: i64, before_epoch: bool) -> Self {
        let number = NonZeroI64::new(elapsed.saturating_add(1)).unwrap_or(NonZeroI64::MAX);
        if before_epoch { Self(-number) } else { Self(number) }
    }

    /// Returns the year value as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0.get()
    }

    /// True for years before the epoch
    #[inline]
    pub const fn is_before_epoch(self) -> bool {
        self.0.get() < 0
    }

    /// Whole years between this year and the epoch, not counting this one
    #[inline]
    pub const fn elapsed(self) -> i64 {
        self.0.get().abs() - 1
    }

    /// Position of this year within the 22-year cycle
    pub const fn cycle_index(self) -> usize {
        let value = self.0.get();
        let index = if value > 0 {
            (value - 1).rem_euclid(CYCLE_YEARS as i64)
        } else {
            value.rem_euclid(CYCLE_YEARS as i64)
        };
        index as usize
    }

    /// Number of sols in this year
    pub const fn length(self) -> u16 {
        YEAR_CYCLE[self.cycle_index()]
    }
}

impl TryFrom<i64> for Year {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month at a 0-based table index
    pub(crate) fn from_index(index: usize) -> Self {
        let offset = u8::try_from(index).unwrap_or(MAX_MONTH - 1).min(MAX_MONTH - 1);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// 0-based index into a month table
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sol (day of month) guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid sol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Sol(NonZeroU8);

impl Sol {
    /// Creates a new Sol, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSol` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidSol {
            year: year.get(),
            month: month.get(),
            sol: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > sols_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Sol at a 0-based position within its month
    pub(crate) fn from_index(index: i64) -> Self {
        let offset = u8::try_from(index).unwrap_or(u8::MAX - 1);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the sol value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Weekday of this sol; every month starts on a Monday
    pub const fn weekday(self) -> Weekday {
        Weekday::from_index((self.0.get() - 1) % DAYS_PER_WEEK)
    }
}

impl TryFrom<u8> for Sol {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        if value < MIN_SOL {
            return Err(ParseError::InvalidSol {
                year: 0,
                month: 0,
                sol: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidSol {
            year: 0,
            month: 0,
            sol: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Sol> for u8 {
    fn from(sol: Sol) -> Self {
        sol.0.get()
    }
}

impl fmt::Display for Sol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week. The epoch falls on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    const fn from_index(index: u8) -> Self {
        Self::ALL[(index % DAYS_PER_WEEK) as usize]
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| day.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::InvalidWeekday(name.to_owned()))
    }
}

// Helper functions

/// Month lengths for a year of `year_sols` sols (668, 669 or 670)
pub fn month_lengths(year_sols: u16) -> &'static [u8; 12] {
    debug_assert!(year_sols >= SHORT_YEAR_SOLS && year_sols <= SHORT_YEAR_SOLS + 2);

    &MONTH_LENGTHS[(year_sols - SHORT_YEAR_SOLS) as usize]
}

pub fn sols_in_month(year: Year, month: Month) -> u8 {
    month_lengths(year.length())[month.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(-1).is_ok());
        assert!(Year::new(2024).is_ok());
        assert!(Year::new(MAX_YEAR).is_ok());
        assert!(Year::new(-MAX_YEAR).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(MAX_YEAR + 1);
        assert!(matches!(result, Err(ParseError::InvalidYear(_))));

        let result = Year::new(i64::MIN);
        assert!(matches!(result, Err(ParseError::InvalidYear(i64::MIN))));
    }

    #[test]
    fn test_year_display() {
        assert_eq!(Year::new(30).unwrap().to_string(), "30");
        assert_eq!(Year::new(-6).unwrap().to_string(), "-6");
    }

    #[test]
    fn test_year_ordering() {
        let before = Year::new(-1).unwrap();
        let after = Year::new(1).unwrap();
        assert!(before < after);
        assert!(Year::new(-22).unwrap() < before);
    }

    #[test]
    fn test_year_elapsed() {
        assert_eq!(Year::new(1).unwrap().elapsed(), 0);
        assert_eq!(Year::new(-1).unwrap().elapsed(), 0);
        assert_eq!(Year::new(23).unwrap().elapsed(), 22);
        assert_eq!(Year::new(-23).unwrap().elapsed(), 22);
    }

    #[test]
    fn test_year_from_elapsed() {
        assert_eq!(Year::from_elapsed(0, false).get(), 1);
        assert_eq!(Year::from_elapsed(0, true).get(), -1);
        assert_eq!(Year::from_elapsed(21, true).get(), -22);
    }

    #[test]
    fn test_year_cycle_index() {
        struct TestCase {
            year: i64,
            index: usize,
            sols: u16,
        }

        let cases = [
            TestCase { year: 1, index: 0, sols: 669 },
            TestCase { year: 2, index: 1, sols: 668 },
            TestCase { year: 22, index: 21, sols: 670 },
            TestCase { year: 23, index: 0, sols: 669 },
            TestCase { year: -1, index: 21, sols: 670 },
            TestCase { year: -2, index: 20, sols: 669 },
            TestCase { year: -22, index: 0, sols: 669 },
            TestCase { year: -23, index: 21, sols: 670 },
        ];

        for case in &cases {
            let year = Year::new(case.year).unwrap();
            assert_eq!(year.cycle_index(), case.index, "Year {} cycle index", case.year);
            assert_eq!(year.length(), case.sols, "Year {} length", case.year);
        }
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(-6).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "-6");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_index_roundtrip() {
        for index in 0..12 {
            assert_eq!(Month::from_index(index).index(), index);
        }
    }

    #[test]
    fn test_month_try_from_u8() {
        let month: Month = 8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 13.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_sol_new_valid() {
        let first = Year::new(1).unwrap();
        let second = Year::new(2).unwrap();
        let before = Year::new(-1).unwrap();
        let january = Month::new(1).unwrap();
        let december = Month::new(12).unwrap();

        assert!(Sol::new(56, first, january).is_ok());
        assert!(Sol::new(57, first, january).is_err());

        // 669-sol year
        assert!(Sol::new(53, first, december).is_ok());
        assert!(Sol::new(54, first, december).is_err());

        // 668-sol year
        assert!(Sol::new(52, second, december).is_ok());
        assert!(Sol::new(53, second, december).is_err());

        // 670-sol year
        assert!(Sol::new(54, before, december).is_ok());
        assert!(Sol::new(55, before, december).is_err());
    }

    #[test]
    fn test_sol_new_invalid_zero() {
        let result = Sol::new(0, Year::new(1).unwrap(), Month::new(1).unwrap());
        assert!(matches!(
            result,
            Err(ParseError::InvalidSol {
                year: 1,
                month: 1,
                sol: 0
            })
        ));
    }

    #[test]
    fn test_sol_try_from_u8() {
        let sol: Sol = 15.try_into().unwrap();
        assert_eq!(sol.get(), 15);

        let result: Result<Sol, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_sol_weekday() {
        let cases = [
            (1, Weekday::Monday),
            (2, Weekday::Tuesday),
            (7, Weekday::Sunday),
            (8, Weekday::Monday),
            (20, Weekday::Saturday),
            (52, Weekday::Wednesday),
            (53, Weekday::Thursday),
            (54, Weekday::Friday),
        ];
        for (value, expected) in cases {
            let sol: Sol = value.try_into().unwrap();
            assert_eq!(sol.weekday(), expected, "Sol {value}");
        }
    }

    #[test]
    fn test_weekday_display_and_parse() {
        for day in Weekday::ALL {
            let text = day.to_string();
            assert_eq!(text.parse::<Weekday>().unwrap(), day);
            assert_eq!(text.to_lowercase().parse::<Weekday>().unwrap(), day);
        }
        assert!(matches!(
            "Caturday".parse::<Weekday>(),
            Err(ParseError::InvalidWeekday(_))
        ));
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for sols in [668u16, 669, 670] {
            let total: u16 = month_lengths(sols).iter().map(|&m| u16::from(m)).sum();
            assert_eq!(total, sols);
        }
    }

    #[test]
    fn test_sols_in_month() {
        let year = Year::new(1).unwrap();
        for month in 1..=11 {
            assert_eq!(sols_in_month(year, Month::new(month).unwrap()), 56);
        }
        assert_eq!(sols_in_month(year, Month::new(12).unwrap()), 53);
    }
}
