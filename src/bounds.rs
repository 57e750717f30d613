use serde::{Deserialize, Serialize};

use crate::{ParseError, date::CalendarDate, rules};

/// Optional inclusive minimum and maximum for the composed date.
///
/// A bound is either absent or a complete calendar date; there is no
/// partially specified bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
}

/// Where a date falls relative to [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsCheck {
    Within,
    BeforeMin,
    AfterMax,
}

impl Bounds {
    /// No min and no max: every date is within bounds
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Bounds are taken as given; a `min` later than `max` simply admits no date.
    pub const fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> Option<CalendarDate> {
        self.min
    }

    pub const fn max(&self) -> Option<CalendarDate> {
        self.max
    }

    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Parses one configured bound. Missing or blank text is an absent bound.
    ///
    /// # Errors
    /// Returns the `ParseError` for text that is not a real `YYYY-MM-DD` date.
    pub fn parse_bound(raw: Option<&str>) -> Result<Option<CalendarDate>, ParseError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => text.parse().map(Some),
        }
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        rules::within_bounds(date, self.min.as_ref(), self.max.as_ref())
    }

    /// Like [`Bounds::contains`], but says which side was violated. When
    /// `min > max` a date can break both; the minimum is reported first.
    pub fn check(&self, date: &CalendarDate) -> BoundsCheck {
        if !rules::within_bounds(date, self.min.as_ref(), None) {
            BoundsCheck::BeforeMin
        } else if !rules::within_bounds(date, None, self.max.as_ref()) {
            BoundsCheck::AfterMax
        } else {
            BoundsCheck::Within
        }
    }
}
