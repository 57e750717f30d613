use serde::{Deserialize, Serialize};

use crate::{
    bounds::{Bounds, BoundsCheck},
    date::CalendarDate,
    field::{DateParts, FieldFlags},
    rules,
};

/// Coarse state of the triple after a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// No field is set
    Empty,
    /// One or two fields are set
    Partial,
    /// All three are set but they are not a real, in-bounds date
    CompleteInvalid,
    /// All three are set and form a real, in-bounds date
    CompleteValid,
}

/// Result of validating one [`DateParts`] against one [`Bounds`].
///
/// Built fresh by [`reconcile`] on every pass; nothing carries over from an
/// earlier pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reconciliation {
    parts: DateParts,
    field_errors: FieldFlags,
    /// The real date the triple spells, whether or not it is in bounds
    date: Option<CalendarDate>,
    /// Set only when `date` is
    bounds_check: Option<BoundsCheck>,
    state: State,
}

impl Reconciliation {
    pub const fn parts(&self) -> &DateParts {
        &self.parts
    }

    pub const fn field_errors(&self) -> FieldFlags {
        self.field_errors
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn bounds_check(&self) -> Option<BoundsCheck> {
        self.bounds_check
    }

    /// The composed date even when it falls outside the bounds
    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    /// The canonical value: a date only in the `CompleteValid` state
    pub const fn value(&self) -> Option<CalendarDate> {
        match self.state {
            State::CompleteValid => self.date,
            State::Empty | State::Partial | State::CompleteInvalid => None,
        }
    }

    /// `YYYY-MM-DD`, or the empty string when there is no value
    pub fn canonical_value(&self) -> String {
        self.value().map(|date| date.to_string()).unwrap_or_default()
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.state, State::CompleteInvalid | State::CompleteValid)
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self.state, State::CompleteValid)
    }
}

/// Runs every rule over the current triple and derives the canonical value.
///
/// Order: each field's own range, then each field against the siblings that
/// are set and in range, then (all three set, no field errors) the calendar
/// round trip, then the bounds. A round-trip or bounds failure belongs to the
/// composed date and flags all three fields. Field values are never cleared.
pub fn reconcile(parts: &DateParts, bounds: &Bounds) -> Reconciliation {
    let day = parts.day.get();
    let month = parts.month.get();
    let year = parts.year.get();

    // An out-of-range sibling has already been flagged on its own and says
    // nothing about the others
    let day_ctx = day.filter(|d| rules::day_in_range(*d));
    let month_ctx = month.filter(|m| rules::month_in_range(*m));
    let year_ctx = year.filter(|y| rules::year_in_range(*y));

    let mut field_errors = FieldFlags {
        day: day.is_some_and(|d| !rules::day_is_valid(d, month_ctx, year_ctx)),
        month: month.is_some_and(|m| !rules::month_is_valid(m, day_ctx, year_ctx)),
        year: year.is_some_and(|y| !rules::year_is_valid(y, month_ctx, day_ctx)),
    };

    let mut date = None;
    let mut bounds_check = None;
    if let Some((y, m, d)) = parts.to_columns().filter(|_| !field_errors.any()) {
        date = rules::calendar_round_trips(y, m, d)
            .then(|| CalendarDate::from_parts(y, m, d))
            .flatten();
        bounds_check = date.map(|date| bounds.check(&date));
        if bounds_check != Some(BoundsCheck::Within) {
            field_errors = FieldFlags::ALL;
        }
    }

    let state = match parts.set_count() {
        0 => State::Empty,
        1 | 2 => State::Partial,
        _ if bounds_check == Some(BoundsCheck::Within) => State::CompleteValid,
        _ => State::CompleteInvalid,
    };

    Reconciliation {
        parts: *parts,
        field_errors,
        date,
        bounds_check,
        state,
    }
}
