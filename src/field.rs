use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseError, date::CalendarDate, prelude::*};

/// One of the three editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(ParseError::UnknownField(s.to_owned())),
        }
    }
}

/// Committed state of a single field.
///
/// `Unset` is distinct from every integer, zero included: a field the user
/// cleared, or filled with something that is not a whole number, is unset.
/// `Set` carries the parsed integer without any range clamping so that an
/// out-of-range entry can still be reported as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum FieldValue {
    #[default]
    Unset,
    Set(i64),
}

impl FieldValue {
    /// Normalizes raw input text. Anything that is not a non-zero integer
    /// (empty text, letters, fractions, overflow, zero) becomes `Unset`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(0) | Err(_) => Self::Unset,
            Ok(n) => Self::Set(n),
        }
    }

    #[inline]
    pub const fn get(self) -> Option<i64> {
        match self {
            Self::Unset => None,
            Self::Set(n) => Some(n),
        }
    }

    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Text to write back into the input after a commit: the normalized
    /// integer (leading zeros stripped) or nothing.
    pub fn display_text(self) -> String {
        self.get().map(|n| n.to_string()).unwrap_or_default()
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        match value {
            None | Some(0) => Self::Unset,
            Some(n) => Self::Set(n),
        }
    }
}

impl From<FieldValue> for Option<i64> {
    fn from(value: FieldValue) -> Self {
        value.get()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// The day/month/year triple under edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub day: FieldValue,
    pub month: FieldValue,
    pub year: FieldValue,
}

impl DateParts {
    /// All three fields unset
    pub const fn empty() -> Self {
        Self {
            day: FieldValue::Unset,
            month: FieldValue::Unset,
            year: FieldValue::Unset,
        }
    }

    pub const fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    /// Normalizes `raw` into `field` and returns the stored value.
    pub fn set_field(&mut self, field: Field, raw: &str) -> FieldValue {
        let value = FieldValue::parse(raw);
        *self.slot(field) = value;
        value
    }

    fn slot(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }

    /// Number of fields currently holding a value
    pub fn set_count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|field| self.get(**field).is_set())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }

    pub fn is_complete(&self) -> bool {
        self.set_count() == Field::ALL.len()
    }

    /// Returns (year, month, day) when all three fields are set
    pub const fn to_columns(&self) -> Option<(i64, i64, i64)> {
        match (self.year, self.month, self.day) {
            (FieldValue::Set(y), FieldValue::Set(m), FieldValue::Set(d)) => Some((y, m, d)),
            _ => None,
        }
    }
}

impl From<CalendarDate> for DateParts {
    fn from(date: CalendarDate) -> Self {
        let (year, month, day) = date.to_columns();
        Self {
            day: FieldValue::Set(i64::from(day)),
            month: FieldValue::Set(i64::from(month)),
            year: FieldValue::Set(i64::from(year)),
        }
    }
}

/// One boolean per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldFlags {
    pub day: bool,
    pub month: bool,
    pub year: bool,
}

impl FieldFlags {
    pub const NONE: Self = Self {
        day: false,
        month: false,
        year: false,
    };
    pub const ALL: Self = Self {
        day: true,
        month: true,
        year: true,
    };

    pub const fn get(&self, field: Field) -> bool {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub const fn any(&self) -> bool {
        self.day || self.month || self.year
    }

    /// Fields whose flag is raised, in day/month/year order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| self.get(*field))
    }
}
