/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Longest month length, the day ceiling before month context is known
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Digits in the year component of the wire format
pub const YEAR_DIGITS: usize = 4;
/// Longest month or day component accepted by the wire format
pub const MAX_COMPONENT_DIGITS: usize = 2;

/// Validation message shown when a required input has no value
pub const DEFAULT_VALUE_MISSING_MESSAGE: &str = "Please enter a date.";
/// Validation message for a complete triple that is not a usable date
pub const BAD_INPUT_MESSAGE: &str = "Please enter a real date.";
/// Validation message for a date before the configured minimum
pub const RANGE_UNDERFLOW_MESSAGE: &str = "Date must be on or after the earliest allowed date.";
/// Validation message for a date after the configured maximum
pub const RANGE_OVERFLOW_MESSAGE: &str = "Date must be on or before the latest allowed date.";

/// Configuration warnings kept by one input before the oldest are dropped
pub const MAX_RECORDED_WARNINGS: usize = 16;
