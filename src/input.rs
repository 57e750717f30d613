use serde::{Deserialize, Serialize};

use crate::{
    BAD_INPUT_MESSAGE, DEFAULT_VALUE_MISSING_MESSAGE, MAX_RECORDED_WARNINGS, ParseError,
    RANGE_OVERFLOW_MESSAGE, RANGE_UNDERFLOW_MESSAGE,
    bounds::{Bounds, BoundsCheck},
    date::CalendarDate,
    field::{DateParts, Field, FieldFlags, FieldValue},
    reconcile::{Reconciliation, State, reconcile},
};

/// Configuration problems that are reported and then ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigWarning {
    /// The `min` bound is not a real `YYYY-MM-DD` date.
    #[error("Supplied min date ({0}) is not a valid date (YYYY-MM-DD), ignoring")]
    InvalidMin(String),

    /// The `max` bound is not a real `YYYY-MM-DD` date.
    #[error("Supplied max date ({0}) is not a valid date (YYYY-MM-DD), ignoring")]
    InvalidMax(String),

    /// A seeded value could not be used; the fields kept their prior state.
    #[error("Supplied value ({value}) is not a valid date (YYYY-MM-DD), ignoring")]
    InvalidValue {
        value: String,
        #[source]
        source: ParseError,
    },
}

/// Form-level validity, the shape a constraint-validation host expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Validity {
    /// Required, but there is no canonical value
    pub value_missing: bool,
    /// Some rule other than the bounds failed
    pub bad_input: bool,
    pub range_underflow: bool,
    pub range_overflow: bool,
    /// Unset fields of a required input
    pub missing: FieldFlags,
}

impl Validity {
    fn evaluate(reconciliation: &Reconciliation, required: bool) -> Self {
        let parts = reconciliation.parts();
        let bounds_check = reconciliation.bounds_check();
        let range_underflow = bounds_check == Some(BoundsCheck::BeforeMin);
        let range_overflow = bounds_check == Some(BoundsCheck::AfterMax);
        let missing = if required {
            FieldFlags {
                day: !parts.day.is_set(),
                month: !parts.month.is_set(),
                year: !parts.year.is_set(),
            }
        } else {
            FieldFlags::NONE
        };

        Self {
            value_missing: required && reconciliation.value().is_none(),
            bad_input: reconciliation.field_errors().any() && !range_underflow && !range_overflow,
            range_underflow,
            range_overflow,
            missing,
        }
    }

    pub const fn is_valid(&self) -> bool {
        !(self.value_missing || self.bad_input || self.range_underflow || self.range_overflow)
    }
}

/// Everything a binding layer needs after one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    reconciliation: Reconciliation,
    validity: Validity,
    /// The canonical value differs from the one before this pass
    changed: bool,
}

impl Snapshot {
    pub const fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    pub const fn validity(&self) -> Validity {
        self.validity
    }

    pub const fn changed(&self) -> bool {
        self.changed
    }

    pub const fn parts(&self) -> &DateParts {
        self.reconciliation.parts()
    }

    pub const fn field_errors(&self) -> FieldFlags {
        self.reconciliation.field_errors()
    }

    pub const fn state(&self) -> State {
        self.reconciliation.state()
    }

    pub const fn value(&self) -> Option<CalendarDate> {
        self.reconciliation.value()
    }

    pub fn canonical_value(&self) -> String {
        self.reconciliation.canonical_value()
    }

    pub const fn is_complete(&self) -> bool {
        self.reconciliation.is_complete()
    }

    pub const fn is_valid(&self) -> bool {
        self.reconciliation.is_valid()
    }
}

/// Result of [`DateInput::commit_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitOutcome {
    pub field: Field,
    /// What the field now holds; `display_text()` is what the input should show
    pub normalized: FieldValue,
    /// False when the input is disabled or read-only and the edit was dropped
    pub accepted: bool,
    pub snapshot: Snapshot,
}

/// Attribute-style configuration, e.g. loaded from JSON by a host page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DateInputConfig {
    pub value: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub value_missing_message: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum BoundSide {
    Min,
    Max,
}

/// One date input: three fields, optional bounds and the derived state.
///
/// Every mutating call runs a single reconciliation pass before returning
/// and hands back the resulting [`Snapshot`].
#[derive(Debug, Clone)]
pub struct DateInput {
    parts: DateParts,
    bounds: Bounds,
    required: bool,
    disabled: bool,
    readonly: bool,
    value_missing_message: String,
    warned_min: bool,
    warned_max: bool,
    warnings: Vec<ConfigWarning>,
    snapshot: Snapshot,
}

impl Default for DateInput {
    fn default() -> Self {
        Self::new()
    }
}

impl DateInput {
    /// An input with all fields unset and no bounds
    pub fn new() -> Self {
        let parts = DateParts::empty();
        let bounds = Bounds::UNBOUNDED;
        let reconciliation = reconcile(&parts, &bounds);
        Self {
            parts,
            bounds,
            required: false,
            disabled: false,
            readonly: false,
            value_missing_message: DEFAULT_VALUE_MISSING_MESSAGE.to_owned(),
            warned_min: false,
            warned_max: false,
            warnings: Vec::new(),
            snapshot: Snapshot {
                validity: Validity::evaluate(&reconciliation, false),
                reconciliation,
                changed: false,
            },
        }
    }

    /// Applies flags and bounds, then seeds the value if one is given.
    pub fn with_config(config: DateInputConfig) -> Self {
        let mut input = Self::new();
        input.required = config.required;
        input.disabled = config.disabled;
        input.readonly = config.readonly;
        if let Some(message) = config.value_missing_message {
            input.value_missing_message = message;
        }
        input.set_bounds(config.min.as_deref(), config.max.as_deref());
        if let Some(value) = config.value.as_deref() {
            input.seed_from_canonical(value);
        }
        input
    }

    /// Commits the raw text of one field and reconciles.
    ///
    /// Ignored, with the current snapshot returned, while the input is
    /// disabled or read-only.
    pub fn commit_field(&mut self, field: Field, raw: &str) -> CommitOutcome {
        if self.disabled || self.readonly {
            tracing::debug!(%field, raw, "date input is locked, dropping commit");
            return CommitOutcome {
                field,
                normalized: self.parts.get(field),
                accepted: false,
                snapshot: Snapshot {
                    changed: false,
                    ..self.snapshot
                },
            };
        }

        let normalized = self.parts.set_field(field, raw);
        CommitOutcome {
            field,
            normalized,
            accepted: true,
            snapshot: self.refresh(),
        }
    }

    /// Replaces all three fields from a `YYYY-MM-DD` string in one pass.
    ///
    /// The empty string clears every field. Any other string that is not a
    /// real date is reported as a [`ConfigWarning`] and leaves the fields as
    /// they were.
    pub fn seed_from_canonical(&mut self, value: &str) -> Snapshot {
        if value.is_empty() {
            self.parts = DateParts::empty();
        } else {
            match value.parse::<CalendarDate>() {
                Ok(date) => self.parts = DateParts::from(date),
                Err(source) => self.warn(ConfigWarning::InvalidValue {
                    value: value.to_owned(),
                    source,
                }),
            }
        }
        self.refresh()
    }

    /// Sets both bounds from `YYYY-MM-DD` strings and reconciles.
    ///
    /// A bound that does not parse is treated as absent; each side warns at
    /// most once over the lifetime of the input.
    pub fn set_bounds(&mut self, min: Option<&str>, max: Option<&str>) -> Snapshot {
        let min = self.resolve_bound(BoundSide::Min, min);
        let max = self.resolve_bound(BoundSide::Max, max);
        self.bounds = Bounds::new(min, max);
        self.refresh()
    }

    fn resolve_bound(&mut self, side: BoundSide, raw: Option<&str>) -> Option<CalendarDate> {
        match Bounds::parse_bound(raw) {
            Ok(bound) => bound,
            Err(_) => {
                let text = raw.unwrap_or_default().to_owned();
                let (warned, warning) = match side {
                    BoundSide::Min => (&mut self.warned_min, ConfigWarning::InvalidMin(text)),
                    BoundSide::Max => (&mut self.warned_max, ConfigWarning::InvalidMax(text)),
                };
                if !*warned {
                    *warned = true;
                    self.warn(warning);
                }
                None
            }
        }
    }

    pub fn set_required(&mut self, required: bool) -> Snapshot {
        self.required = required;
        self.refresh()
    }

    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub const fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    pub fn set_value_missing_message(&mut self, message: impl Into<String>) {
        self.value_missing_message = message.into();
    }

    /// Records a warning unless it repeats the last one. The log keeps only
    /// the newest `MAX_RECORDED_WARNINGS` entries.
    fn warn(&mut self, warning: ConfigWarning) {
        if self.warnings.last() == Some(&warning) {
            tracing::debug!(%warning, "repeated date input warning suppressed");
            return;
        }
        tracing::warn!(%warning, "date input configuration ignored");
        if self.warnings.len() == MAX_RECORDED_WARNINGS {
            self.warnings.remove(0);
        }
        self.warnings.push(warning);
    }

    fn refresh(&mut self) -> Snapshot {
        let reconciliation = reconcile(&self.parts, &self.bounds);
        let changed = reconciliation.value() != self.snapshot.value();
        self.snapshot = Snapshot {
            validity: Validity::evaluate(&reconciliation, self.required),
            reconciliation,
            changed,
        };
        self.snapshot
    }

    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub const fn parts(&self) -> &DateParts {
        &self.parts
    }

    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn canonical_value(&self) -> String {
        self.snapshot.canonical_value()
    }

    /// The value reported to an enclosing form (empty when there is none)
    pub fn form_value(&self) -> String {
        self.canonical_value()
    }

    pub const fn value(&self) -> Option<CalendarDate> {
        self.snapshot.value()
    }

    pub const fn field_errors(&self) -> FieldFlags {
        self.snapshot.field_errors()
    }

    pub const fn state(&self) -> State {
        self.snapshot.state()
    }

    pub const fn is_complete(&self) -> bool {
        self.snapshot.is_complete()
    }

    /// True when the fields form a real, in-bounds date
    pub const fn is_valid(&self) -> bool {
        self.snapshot.is_valid()
    }

    pub const fn validity(&self) -> Validity {
        self.snapshot.validity()
    }

    /// Form-level check: also fails a required input that has no value
    pub const fn check_validity(&self) -> bool {
        self.snapshot.validity().is_valid()
    }

    /// Message for the first failing constraint, empty when valid
    pub fn validation_message(&self) -> String {
        let validity = self.validity();
        if validity.value_missing {
            self.value_missing_message.clone()
        } else if validity.bad_input {
            BAD_INPUT_MESSAGE.to_owned()
        } else if validity.range_underflow {
            match self.bounds.min() {
                Some(min) => format!("{RANGE_UNDERFLOW_MESSAGE} ({min})"),
                None => RANGE_UNDERFLOW_MESSAGE.to_owned(),
            }
        } else if validity.range_overflow {
            match self.bounds.max() {
                Some(max) => format!("{RANGE_OVERFLOW_MESSAGE} ({max})"),
                None => RANGE_OVERFLOW_MESSAGE.to_owned(),
            }
        } else {
            String::new()
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub const fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Recent configuration warnings, oldest first
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(day: &str, month: &str, year: &str) -> DateInput {
        let mut input = DateInput::new();
        input.commit_field(Field::Day, day);
        input.commit_field(Field::Month, month);
        input.commit_field(Field::Year, year);
        input
    }

    #[test]
    fn test_new_is_empty() {
        let input = DateInput::new();
        assert_eq!(input.state(), State::Empty);
        assert_eq!(input.canonical_value(), "");
        assert_eq!(input.field_errors(), FieldFlags::NONE);
        assert!(!input.is_complete());
        assert!(!input.is_valid());
        assert!(input.check_validity());
        assert!(input.warnings().is_empty());
    }

    #[test]
    fn test_april_thirty_first() {
        let input = filled("31", "4", "2023");
        assert_eq!(input.canonical_value(), "");
        assert!(input.field_errors().day);
        assert!(input.field_errors().month);
        assert!(!input.field_errors().year);
        assert!(input.validity().bad_input);
        assert_eq!(input.validation_message(), BAD_INPUT_MESSAGE);
    }

    #[test]
    fn test_leap_day_2024() {
        let input = filled("29", "2", "2024");
        assert_eq!(input.canonical_value(), "2024-02-29");
        assert_eq!(input.field_errors(), FieldFlags::NONE);
        assert_eq!(input.state(), State::CompleteValid);
        assert!(input.is_valid());
        assert_eq!(input.validation_message(), "");
    }

    #[test]
    fn test_leap_day_2023() {
        let input = filled("29", "2", "2023");
        assert_eq!(input.canonical_value(), "");
        assert!(input.field_errors().day);
        assert_eq!(input.state(), State::CompleteInvalid);
    }

    #[test]
    fn test_seed_outside_bounds() {
        let mut input = DateInput::new();
        input.set_bounds(Some("2020-01-01"), Some("2020-12-31"));
        let snapshot = input.seed_from_canonical("2019-12-31");

        assert_eq!(snapshot.canonical_value(), "");
        assert_eq!(snapshot.field_errors(), FieldFlags::ALL);
        assert!(snapshot.validity().range_underflow);
        assert_eq!(
            input.validation_message(),
            format!("{RANGE_UNDERFLOW_MESSAGE} (2020-01-01)")
        );
        // The user's entry is kept
        assert_eq!(input.parts().year, FieldValue::Set(2019));
        assert_eq!(input.parts().day, FieldValue::Set(31));
    }

    #[test]
    fn test_after_max() {
        let mut input = DateInput::new();
        input.set_bounds(None, Some("2020-12-31"));
        input.seed_from_canonical("2021-01-01");
        assert!(input.validity().range_overflow);
        assert_eq!(input.field_errors(), FieldFlags::ALL);
        assert_eq!(
            input.validation_message(),
            format!("{RANGE_OVERFLOW_MESSAGE} (2020-12-31)")
        );
    }

    #[test]
    fn test_only_year_set() {
        let mut input = DateInput::new();
        let outcome = input.commit_field(Field::Year, "2024");
        assert_eq!(outcome.snapshot.state(), State::Partial);
        assert_eq!(outcome.snapshot.canonical_value(), "");
        assert_eq!(outcome.snapshot.field_errors(), FieldFlags::NONE);
    }

    #[test]
    fn test_malformed_min_is_ignored() {
        let mut input = DateInput::new();
        input.set_bounds(Some("not-a-date"), None);
        assert!(input.bounds().is_unbounded());

        input.seed_from_canonical("1900-01-01");
        assert_eq!(input.canonical_value(), "1900-01-01");
        assert_eq!(
            input.warnings(),
            &[ConfigWarning::InvalidMin("not-a-date".to_owned())]
        );
    }

    #[test]
    fn test_bound_warning_is_raised_once_per_side() {
        let mut input = DateInput::new();
        input.set_bounds(Some("not-a-date"), Some("2023-02-29"));
        input.set_bounds(Some("still-bad"), Some("2023-02-30"));
        input.commit_field(Field::Day, "1");
        input.set_bounds(Some("bad-again"), None);

        assert_eq!(
            input.warnings(),
            &[
                ConfigWarning::InvalidMin("not-a-date".to_owned()),
                ConfigWarning::InvalidMax("2023-02-29".to_owned()),
            ]
        );
    }

    #[test]
    fn test_seed_round_trips() {
        for value in [
            "2024-02-29",
            "2000-02-29",
            "0001-01-01",
            "9999-12-31",
            "1999-12-31",
            "2023-04-30",
            "0987-06-05",
        ] {
            let mut input = DateInput::new();
            let snapshot = input.seed_from_canonical(value);
            assert_eq!(snapshot.canonical_value(), value);
            assert_eq!(input.form_value(), value);
        }
    }

    #[test]
    fn test_seed_normalizes_short_components() {
        let mut input = DateInput::new();
        assert_eq!(input.seed_from_canonical("2024-2-9").canonical_value(), "2024-02-09");
    }

    #[test]
    fn test_malformed_seed_keeps_prior_state() {
        let mut input = filled("15", "6", "2022");
        let snapshot = input.seed_from_canonical("2022-02-30");

        assert_eq!(snapshot.canonical_value(), "2022-06-15");
        assert!(!snapshot.changed());
        assert!(matches!(
            input.warnings(),
            [ConfigWarning::InvalidValue {
                source: ParseError::InvalidDay { .. },
                ..
            }]
        ));

        input.seed_from_canonical("15/06/2022");
        assert_eq!(input.warnings().len(), 2);
        assert_eq!(input.canonical_value(), "2022-06-15");
    }

    #[test]
    fn test_malformed_seed_on_fresh_input_stays_empty() {
        let mut input = DateInput::new();
        let snapshot = input.seed_from_canonical("garbage");
        assert_eq!(snapshot.state(), State::Empty);
        assert_eq!(input.warnings().len(), 1);
    }

    #[test]
    fn test_repeated_malformed_seed_warns_once() {
        let mut input = DateInput::new();
        for _ in 0..1000 {
            input.seed_from_canonical("garbage");
        }
        assert_eq!(input.warnings().len(), 1);

        input.seed_from_canonical("2023-02-30");
        input.seed_from_canonical("garbage");
        assert_eq!(input.warnings().len(), 3);
    }

    #[test]
    fn test_warning_log_keeps_newest() {
        let mut input = DateInput::new();
        for year in 0..100 {
            input.seed_from_canonical(&format!("{year}-bad"));
        }
        assert_eq!(input.warnings().len(), MAX_RECORDED_WARNINGS);
        assert!(matches!(
            input.warnings().last(),
            Some(ConfigWarning::InvalidValue { value, .. }) if value == "99-bad"
        ));
    }

    #[test]
    fn test_empty_seed_clears() {
        let mut input = filled("15", "6", "2022");
        let snapshot = input.seed_from_canonical("");
        assert_eq!(snapshot.state(), State::Empty);
        assert!(snapshot.changed());
        assert!(input.warnings().is_empty());
    }

    #[test]
    fn test_seed_is_a_single_pass() {
        // Seeding over a complete date must not pass through the transient
        // states three single-field commits would produce
        let mut input = filled("31", "1", "2024");
        let snapshot = input.seed_from_canonical("2024-02-29");
        assert_eq!(snapshot.field_errors(), FieldFlags::NONE);
        assert_eq!(snapshot.canonical_value(), "2024-02-29");

        // Committing the same change field by field does pass through one
        let mut input = filled("31", "1", "2024");
        let outcome = input.commit_field(Field::Month, "2");
        assert!(outcome.snapshot.field_errors().day);
        let outcome = input.commit_field(Field::Day, "29");
        assert_eq!(outcome.snapshot.canonical_value(), "2024-02-29");
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut input = filled("31", "4", "2023");
        let once = input.commit_field(Field::Month, "5").snapshot;
        let twice = input.commit_field(Field::Month, "5").snapshot;

        assert_eq!(once.field_errors(), twice.field_errors());
        assert_eq!(once.canonical_value(), twice.canonical_value());
        assert!(once.changed());
        assert!(!twice.changed());
    }

    #[test]
    fn test_commit_normalizes() {
        let mut input = DateInput::new();
        let outcome = input.commit_field(Field::Month, "07");
        assert_eq!(outcome.normalized, FieldValue::Set(7));
        assert_eq!(outcome.normalized.display_text(), "7");
        assert!(outcome.accepted);

        let outcome = input.commit_field(Field::Month, "July");
        assert_eq!(outcome.normalized, FieldValue::Unset);
        assert_eq!(outcome.snapshot.state(), State::Empty);
    }

    #[test]
    fn test_out_of_range_commit_is_reported_not_dropped() {
        let mut input = DateInput::new();
        let outcome = input.commit_field(Field::Day, "32");
        assert_eq!(outcome.normalized, FieldValue::Set(32));
        assert!(outcome.snapshot.field_errors().day);
        assert_eq!(outcome.snapshot.state(), State::Partial);
    }

    #[test]
    fn test_clearing_a_field_drops_the_value() {
        let mut input = filled("29", "2", "2024");
        let outcome = input.commit_field(Field::Day, "");
        assert_eq!(outcome.snapshot.state(), State::Partial);
        assert_eq!(outcome.snapshot.canonical_value(), "");
        assert!(outcome.snapshot.changed());
    }

    #[test]
    fn test_bounds_change_revalidates() {
        let mut input = filled("15", "6", "2022");
        assert!(input.is_valid());

        let snapshot = input.set_bounds(Some("2023-01-01"), None);
        assert!(!snapshot.is_valid());
        assert!(snapshot.changed());

        let snapshot = input.set_bounds(None, None);
        assert_eq!(snapshot.canonical_value(), "2022-06-15");
    }

    #[test]
    fn test_required_value_missing() {
        let mut input = DateInput::new();
        let snapshot = input.set_required(true);
        assert!(snapshot.validity().value_missing);
        assert_eq!(snapshot.validity().missing, FieldFlags::ALL);
        assert!(!input.check_validity());
        assert_eq!(input.validation_message(), DEFAULT_VALUE_MISSING_MESSAGE);

        input.commit_field(Field::Year, "2024");
        let validity = input.validity();
        assert_eq!(
            validity.missing,
            FieldFlags {
                day: true,
                month: true,
                year: false,
            }
        );
        // Missing fields are not rule errors
        assert_eq!(input.field_errors(), FieldFlags::NONE);

        input.set_value_missing_message("Enter your date of birth");
        assert_eq!(input.validation_message(), "Enter your date of birth");

        input.commit_field(Field::Month, "3");
        input.commit_field(Field::Day, "1");
        assert!(input.check_validity());
    }

    #[test]
    fn test_required_with_invalid_date_is_value_missing() {
        let mut input = DateInput::new();
        input.set_required(true);
        input.set_value_missing_message("Enter your date of birth");
        input.commit_field(Field::Day, "31");
        input.commit_field(Field::Month, "4");
        input.commit_field(Field::Year, "2023");

        let validity = input.validity();
        assert!(validity.value_missing);
        assert!(validity.bad_input);
        assert_eq!(validity.missing, FieldFlags::NONE);
        assert_eq!(input.state(), State::CompleteInvalid);
        assert!(!input.check_validity());
        assert_eq!(input.validation_message(), "Enter your date of birth");

        input.commit_field(Field::Day, "30");
        assert!(!input.validity().value_missing);
        assert!(input.check_validity());
    }

    #[test]
    fn test_locked_input_drops_commits() {
        let mut input = filled("15", "6", "2022");
        input.set_readonly(true);
        let outcome = input.commit_field(Field::Day, "16");
        assert!(!outcome.accepted);
        assert_eq!(outcome.normalized, FieldValue::Set(15));
        assert!(!outcome.snapshot.changed());
        assert_eq!(input.canonical_value(), "2022-06-15");

        input.set_readonly(false);
        input.set_disabled(true);
        assert!(!input.commit_field(Field::Day, "16").accepted);

        // Programmatic seeding still applies
        input.seed_from_canonical("2022-06-16");
        assert_eq!(input.canonical_value(), "2022-06-16");

        input.set_disabled(false);
        assert!(input.commit_field(Field::Day, "17").accepted);
        assert_eq!(input.canonical_value(), "2022-06-17");
    }

    #[test]
    fn test_with_config() {
        let config: DateInputConfig = serde_json::from_str(
            r#"{
                "value": "2020-06-15",
                "min": "2020-01-01",
                "max": "not-a-date",
                "required": true,
                "value_missing_message": "Date required"
            }"#,
        )
        .unwrap();
        let input = DateInput::with_config(config);

        assert_eq!(input.canonical_value(), "2020-06-15");
        assert!(input.is_required());
        assert!(!input.is_disabled());
        assert!(!input.is_readonly());
        assert_eq!(input.bounds().max(), None);
        assert_eq!(
            input.warnings(),
            &[ConfigWarning::InvalidMax("not-a-date".to_owned())]
        );
    }

    #[test]
    fn test_warning_messages() {
        assert_eq!(
            ConfigWarning::InvalidMin("x".to_owned()).to_string(),
            "Supplied min date (x) is not a valid date (YYYY-MM-DD), ignoring"
        );
        let warning = ConfigWarning::InvalidValue {
            value: "2023-02-29".to_owned(),
            source: ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29,
            },
        };
        assert!(std::error::Error::source(&warning).is_some());
    }

    #[test]
    fn test_snapshot_serializes_for_bindings() {
        let input = filled("29", "2", "2024");
        let json = serde_json::to_value(input.snapshot()).unwrap();
        assert_eq!(json["state"], "complete_valid");
        assert_eq!(json["date"], "2024-02-29");
        assert_eq!(json["parts"]["day"], 29);
        assert_eq!(json["field_errors"]["month"], false);
        assert_eq!(json["changed"], true);
    }
}
