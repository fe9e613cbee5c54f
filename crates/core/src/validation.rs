//! Field validation for new catalog entries -- pure logic, no database access.
//!
//! Input arrives as a loosely-typed field map (JSON object or decoded form),
//! so every rule inspects raw [`Value`]s and all failing fields are reported
//! together rather than stopping at the first one.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::Date;

pub const BLANK: &str = "can't be blank";
pub const NOT_A_NUMBER: &str = "is not a number";
pub const NOT_AN_INTEGER: &str = "must be an integer";
pub const NEGATIVE: &str = "must be greater than or equal to 0";
pub const TOO_LARGE: &str = "must be less than or equal to 2147483647";

/// Wire format accepted for `release_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Violation messages keyed by field name.
///
/// Serializes as `{ "title": ["can't be blank"], ... }` with fields in
/// alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<&'static str>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one violation against `field`.
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one violation.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[&'static str]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// A video that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub overview: String,
    pub release_date: Date,
    pub total_inventory: i32,
    pub available_inventory: i32,
}

/// Validate a flat field set into a [`NewVideo`].
///
/// Unknown keys are ignored. `available_inventory` is not compared against
/// `total_inventory`.
pub fn validate_new_video(data: &Map<String, Value>) -> Result<NewVideo, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = required_text(data, "title", &mut errors);
    let overview = required_text(data, "overview", &mut errors);
    let release_date = required_date(data, "release_date", &mut errors);
    let total_inventory = inventory_count(data, "total_inventory", &mut errors);
    let available_inventory = inventory_count(data, "available_inventory", &mut errors);

    match (
        title,
        overview,
        release_date,
        total_inventory,
        available_inventory,
    ) {
        (
            Some(title),
            Some(overview),
            Some(release_date),
            Some(total_inventory),
            Some(available_inventory),
        ) if errors.is_empty() => Ok(NewVideo {
            title,
            overview,
            release_date,
            total_inventory,
            available_inventory,
        }),
        _ => Err(errors),
    }
}

/// Render a scalar as text. Arrays, objects and null have no text form.
fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn required_text(
    data: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match as_text(data.get(field)) {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.add(field, BLANK);
            None
        }
    }
}

/// An unparseable date cannot be stored, so it counts as blank.
fn required_date(
    data: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<Date> {
    let parsed = data
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| Date::parse_from_str(s.trim(), DATE_FORMAT).ok());
    if parsed.is_none() {
        errors.add(field, BLANK);
    }
    parsed
}

/// Outcome of reading a raw value as a whole number.
enum Numeric {
    Blank,
    NotANumber,
    Fractional,
    Integer(i64),
    /// Whole number outside `i64`; only the sign matters from here on.
    Overflow { negative: bool },
}

fn classify_number(value: Option<&Value>) -> Numeric {
    match value {
        None | Some(Value::Null) => Numeric::Blank,
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Numeric::Integer(i)
            } else if n.is_u64() {
                Numeric::Overflow { negative: false }
            } else {
                Numeric::Fractional
            }
        }
        Some(Value::String(s)) => classify_numeric_text(s.trim()),
        Some(_) => Numeric::NotANumber,
    }
}

fn classify_numeric_text(s: &str) -> Numeric {
    if s.is_empty() {
        return Numeric::Blank;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Numeric::Integer(i);
    }
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Numeric::Overflow {
            negative: s.starts_with('-'),
        };
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Numeric::Fractional,
        _ => Numeric::NotANumber,
    }
}

fn inventory_count(
    data: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<i32> {
    match classify_number(data.get(field)) {
        Numeric::Blank => {
            errors.add(field, BLANK);
            errors.add(field, NOT_A_NUMBER);
            None
        }
        Numeric::NotANumber => {
            errors.add(field, NOT_A_NUMBER);
            None
        }
        Numeric::Fractional => {
            errors.add(field, NOT_AN_INTEGER);
            None
        }
        Numeric::Integer(i) if i < 0 => {
            errors.add(field, NEGATIVE);
            None
        }
        Numeric::Overflow { negative: true } => {
            errors.add(field, NEGATIVE);
            None
        }
        Numeric::Integer(i) => match i32::try_from(i) {
            Ok(count) => Some(count),
            Err(_) => {
                errors.add(field, TOO_LARGE);
                None
            }
        },
        Numeric::Overflow { negative: false } => {
            errors.add(field, TOO_LARGE);
            None
        }
    }
}
