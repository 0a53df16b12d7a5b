/// Milliseconds in one Mars solar day (sol)
pub const SOL_LENGTH: i64 = 88_775_244;

/// Milliseconds in one Earth calendar day
pub const EARTH_DAY_LENGTH: i64 = 86_400_000;

/// Length of a "Mars second" in milliseconds (a sol divided into 86 400 parts)
#[allow(clippy::cast_precision_loss)]
pub const MARS_SECOND_LENGTH: f64 = SOL_LENGTH as f64 / 86_400.0;

/// Clock milliseconds in one sol under the Mars-second convention
pub const MTC_MILLIS_PER_SOL: i64 = 86_400_000;

/// Milliseconds per hour, minute and second of a clock reading
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Number of years in one leap cycle
pub const CYCLE_YEARS: usize = 22;

/// Sols in each year of the 22-year cycle.
/// Eleven 669-sol years alternate with ten 668-sol years; the 670-sol year closes the cycle.
pub const YEAR_CYCLE: [u16; CYCLE_YEARS] = [
    669, 668, 669, 668, 669, 668, 669, 668, 669, 668, 669,
    668, 669, 668, 669, 668, 669, 668, 669, 668, 669, 670,
];

/// Sols in one full cycle
pub const CYCLE_SOLS: i64 = 14_709;

/// Milliseconds in one full cycle
pub const CYCLE_LENGTH_MS: i64 = CYCLE_SOLS * SOL_LENGTH;

/// Shortest year length in sols, the first row of `MONTH_LENGTHS`
pub const SHORT_YEAR_SOLS: u16 = 668;

/// Sols per month for 668-, 669- and 670-sol years, in that order.
/// Eleven 56-sol months, then a final month that absorbs the difference.
pub static MONTH_LENGTHS: [[u8; 12]; 3] = [
    [56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 52],
    [56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 53],
    [56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 56, 54],
];

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Largest year magnitude accepted on construction.
/// Years reached by `i64::MIN` and `i64::MAX` milliseconds, so every
/// timestamp `forward` renders parses back.
pub const MAX_YEAR: i64 = 155_395_124;

/// Maximum valid month
pub const MAX_MONTH: u8 = 12;

/// First sol of a month, used for lower bounds
pub const MIN_SOL: u8 = 1;

/// Date component separator, also the marker of years before the epoch
pub const DATE_SEPARATOR: char = '-';
/// Clock component separator
pub const TIME_SEPARATOR: char = ':';
/// Separator between seconds and their fraction
pub const FRACTION_SEPARATOR: char = '.';
/// Separator in front of the informational weekday name
pub const WEEKDAY_SEPARATOR: char = ',';
