//! Pure validation predicates over a day/month/year triple.
//!
//! Field values arrive as `Option<i64>`: `None` is an unset field, `Some` is
//! whatever integer was committed, in range or not. Nothing here panics or
//! returns an error; every rule answers with a `bool` or a number.

use chrono::{Datelike, NaiveDate};

use crate::{
    DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_MONTH,
    MIN_YEAR, date::CalendarDate, types::Year,
};

/// Narrows a committed year to one that can belong to a real date.
fn calendar_year(year: Option<i64>) -> Option<Year> {
    year.and_then(|y| u16::try_from(y).ok()).and_then(|y| Year::new(y).ok())
}

fn calendar_month(month: Option<i64>) -> Option<u8> {
    month
        .and_then(|m| u8::try_from(m).ok())
        .filter(|m| (MIN_MONTH..=MAX_MONTH).contains(m))
}

pub fn day_in_range(day: i64) -> bool {
    (i64::from(MIN_DAY)..=i64::from(MAX_DAY)).contains(&day)
}

pub fn month_in_range(month: i64) -> bool {
    (i64::from(MIN_MONTH)..=i64::from(MAX_MONTH)).contains(&month)
}

pub fn year_in_range(year: i64) -> bool {
    (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year)
}

/// Gregorian leap year rule. An unset year is never a leap year, and neither
/// is a year outside `MIN_YEAR..=MAX_YEAR`.
pub fn is_leap_year(year: Option<i64>) -> bool {
    calendar_year(year).is_some_and(Year::is_leap)
}

/// Length of `month` in `year`. An unset (or out-of-range) month yields the
/// most permissive length, 31, until the real month is known.
pub fn max_day_for_month(month: Option<i64>, year: Option<i64>) -> i64 {
    let Some(month) = calendar_month(month) else {
        return i64::from(MAX_DAY);
    };
    if month == FEBRUARY && is_leap_year(year) {
        i64::from(FEBRUARY_DAYS_LEAP)
    } else {
        i64::from(DAYS_IN_MONTH[usize::from(month)])
    }
}

pub fn day_is_valid(day: i64, month: Option<i64>, year: Option<i64>) -> bool {
    day_in_range(day) && day <= max_day_for_month(month, year)
}

/// Checks the month from its own side: a month that the already-set day
/// does not fit into is invalid too.
pub fn month_is_valid(month: i64, day: Option<i64>, year: Option<i64>) -> bool {
    if !month_in_range(month) {
        return false;
    }
    day.is_none_or(|day| day <= max_day_for_month(Some(month), year))
}

/// Beyond the primitive range, a year is only wrong when it turns a
/// 29th of February into a non-existent date.
pub fn year_is_valid(year: i64, month: Option<i64>, day: Option<i64>) -> bool {
    if !year_in_range(year) {
        return false;
    }
    match (month, day) {
        (Some(month), Some(day)) if month == i64::from(FEBRUARY) => {
            day <= max_day_for_month(Some(month), Some(year))
        }
        _ => true,
    }
}

/// Inclusive whole-date bound check. The comparison goes through the linear
/// day count, never component by component.
pub fn within_bounds(
    candidate: &CalendarDate,
    min: Option<&CalendarDate>,
    max: Option<&CalendarDate>,
) -> bool {
    let day = candidate.day_number();
    min.is_none_or(|min| min.day_number() <= day) && max.is_none_or(|max| day <= max.day_number())
}

/// Builds the date through the calendar library and confirms nothing rolled
/// over (e.g. 31 April silently becoming 1 May).
pub fn calendar_round_trips(year: i64, month: i64, day: i64) -> bool {
    let (Ok(y), Ok(m), Ok(d)) = (
        i32::try_from(year),
        u32::try_from(month),
        u32::try_from(day),
    ) else {
        return false;
    };
    NaiveDate::from_ymd_opt(y, m, d)
        .is_some_and(|date| date.year() == y && date.month() == m && date.day() == d)
}
