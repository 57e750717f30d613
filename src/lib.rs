//! Validation and reconciliation engine for a date entered as three
//! independent day, month and year fields.
//!
//! Fields are committed one at a time (or seeded together from a
//! `YYYY-MM-DD` string); after every commit the whole triple is re-validated
//! against itself and against the optional min/max bounds, and a single
//! canonical value is derived.
//!
//! ```
//! use date_input::{DateInput, Field};
//!
//! let mut input = DateInput::new();
//! input.commit_field(Field::Day, "29");
//! input.commit_field(Field::Month, "02");
//! let outcome = input.commit_field(Field::Year, "2024");
//!
//! assert_eq!(outcome.snapshot.canonical_value(), "2024-02-29");
//! assert!(input.is_valid());
//! ```

mod bounds;
mod consts;
mod date;
mod field;
mod input;
mod prelude;
mod reconcile;
pub mod rules;
mod types;

pub use bounds::{Bounds, BoundsCheck};
pub use consts::*;
pub use date::CalendarDate;
pub use field::{DateParts, Field, FieldFlags, FieldValue};
pub use input::{CommitOutcome, ConfigWarning, DateInput, DateInputConfig, Snapshot, Validity};
pub use reconcile::{Reconciliation, State, reconcile};
pub use types::{Day, Month, Year, day_number, days_in_month, is_leap_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown field: {_0} (expected day, month or year)")]
    UnknownField(String),
}

impl std::error::Error for ParseError {}
