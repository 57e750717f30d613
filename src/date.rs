use std::{cmp::Ordering, str::FromStr};

use crate::{
    DATE_SEPARATOR, MAX_COMPONENT_DIGITS, ParseError, YEAR_DIGITS,
    prelude::*,
    types::{Day, Month, Year, day_number},
};

/// A complete, calendar-valid date. This is the only shape a canonical value
/// or a configured bound can take.
///
/// Formats as `YYYY-MM-DD` (zero-padded) and orders as a whole date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{}-{}", year, month, day)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

impl CalendarDate {
    /// Creates a date from raw components, checking ranges and month length.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from the wide integers held by the field store.
    /// Returns `None` for anything that is not a real date.
    pub fn from_parts(year: i64, month: i64, day: i64) -> Option<Self> {
        let year = u16::try_from(year).ok()?;
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        Self::new(year, month, day).ok()
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns (year, month, day) as plain integers
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Linear day count (days since 1970-01-01) used for whole-date comparison
    pub const fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Checks one wire component: ASCII digits only, with a length window.
    fn digits(s: &str, min_len: usize, max_len: usize) -> Result<&str, ParseError> {
        let len_ok = (min_len..=max_len).contains(&s.len());
        if !len_ok || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        Ok(s)
    }

    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Strict wire format: a 4-digit year, then a 1–2 digit month and day.
    /// No surrounding whitespace, signs or time component is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators in {s}",
                parts.len() - 1
            )));
        };

        let year = Self::parse_u16(Self::digits(year, YEAR_DIGITS, YEAR_DIGITS)?)?;
        let month = Self::parse_u8(Self::digits(month, 1, MAX_COMPONENT_DIGITS)?)?;
        let day = Self::parse_u8(Self::digits(day, 1, MAX_COMPONENT_DIGITS)?)?;

        Self::new(year, month, day)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.day_number().cmp(&other.day_number())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
