//! Field validation for hotel and picture payloads.
//!
//! The backend runs these rules before touching the database, and the
//! frontend runs the same rules before submitting a form, so both sides report
//! identical messages.
//!
//! Inputs are raw JSON. Strings are trimmed, and an empty string counts as a
//! missing value. Numeric fields accept JSON numbers as well as numeric strings,
//! since HTML forms only ever submit strings.

use crate::model::hotel::HotelFields;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAME_MAX_CHARS: usize = 255;
pub const ZIPCODE_MAX_CHARS: usize = 20;
pub const DESCRIPTION_MAX_CHARS: usize = 5000;
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const MAX_CAPACITY_RANGE: (i64, i64) = (1, 200);
pub const PRICE_PER_NIGHT_MIN: f64 = 0.0;

/// Every hotel field accepted by create and update, in form order.
pub const HOTEL_FIELDS: [&str; 11] = [
    "name",
    "address",
    "address2",
    "zipcode",
    "city",
    "country",
    "latitude",
    "longitude",
    "description",
    "max_capacity",
    "price_per_night",
];

/// Field-level validation failures, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Error)]
#[error("Validation error")]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    pub fn into_map(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }

    /// `Ok(value)` when no error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Human name of a field as used in messages: `max_capacity` → `max capacity`.
pub fn attribute_name(field: &str) -> String {
    field.replace('_', " ")
}

pub fn required_message(field: &str) -> String {
    format!("The {} field is required.", attribute_name(field))
}

/// Validates a complete hotel payload (create and PUT).
pub fn validate_hotel(payload: &Value) -> Result<HotelFields, ValidationErrors> {
    let draft = HotelDraft::read(payload, Mode::Full)?;
    Ok(draft.apply(HotelFields::default()))
}

/// Validates the fields present in `payload` and merges them onto `current`
/// (PATCH). Absent fields keep their stored value; a required field sent
/// empty is still an error.
pub fn validate_hotel_patch(
    payload: &Value,
    current: &HotelFields,
) -> Result<HotelFields, ValidationErrors> {
    let draft = HotelDraft::read(payload, Mode::Partial)?;
    Ok(draft.apply(current.clone()))
}

/// The non-file fields of a picture upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureMeta {
    pub index: i64,
    pub hotel_id: i64,
}

/// Validates `index` and `hotel_id` of a picture upload. Whether the hotel
/// exists is checked by the caller.
pub fn validate_picture_meta(payload: &Value) -> Result<PictureMeta, ValidationErrors> {
    let empty = Map::new();
    let mut reader = Reader::new(payload.as_object().unwrap_or(&empty), Mode::Full);
    let index = reader.integer("index", Some(0), None);
    let hotel_id = reader.integer("hotel_id", None, None);
    let errors = reader.errors;
    match (index, hotel_id) {
        (Some(index), Some(hotel_id)) if errors.is_empty() => Ok(PictureMeta { index, hotel_id }),
        _ => Err(errors),
    }
}

/// Validates a new slideshow index.
pub fn validate_index(value: &Value) -> Result<i64, ValidationErrors> {
    let mut payload = Map::new();
    payload.insert("index".to_string(), value.clone());
    let mut reader = Reader::new(&payload, Mode::Full);
    let index = reader.integer("index", Some(0), None);
    match index {
        Some(index) if reader.errors.is_empty() => Ok(index),
        _ => Err(reader.errors),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Every required field must be present.
    Full,
    /// Absent fields are skipped.
    Partial,
}

enum Input<'a> {
    Missing,
    Blank,
    Given(&'a Value),
}

struct Reader<'a> {
    payload: &'a Map<String, Value>,
    mode: Mode,
    errors: ValidationErrors,
}

impl<'a> Reader<'a> {
    fn new(payload: &'a Map<String, Value>, mode: Mode) -> Self {
        Self {
            payload,
            mode,
            errors: ValidationErrors::new(),
        }
    }

    fn input(&self, field: &str) -> Input<'a> {
        match self.payload.get(field) {
            None => Input::Missing,
            Some(Value::Null) => Input::Blank,
            Some(Value::String(s)) if s.trim().is_empty() => Input::Blank,
            Some(value) => Input::Given(value),
        }
    }

    /// `None`: skipped or failed. `Some(None)`: explicitly empty nullable field.
    fn given(&mut self, field: &str, required: bool) -> Option<Option<&'a Value>> {
        match self.input(field) {
            Input::Missing if self.mode == Mode::Partial => None,
            Input::Missing | Input::Blank => {
                if required {
                    self.errors.add(field, required_message(field));
                    None
                } else {
                    Some(None)
                }
            }
            Input::Given(value) => Some(Some(value)),
        }
    }

    fn string(&mut self, field: &str, required: bool, max_chars: Option<usize>) -> Option<Option<String>> {
        let Some(value) = self.given(field, required)? else {
            return Some(None);
        };
        let Value::String(s) = value else {
            self.fail(field, "must be a string");
            return None;
        };
        let s = s.trim();
        if let Some(max) = max_chars {
            if s.chars().count() > max {
                self.fail(field, &format!("must not be greater than {} characters", max));
                return None;
            }
        }
        Some(Some(s.to_string()))
    }

    fn number(&mut self, field: &str, min: Option<f64>, max: Option<f64>) -> Option<f64> {
        let value = self.given(field, true).flatten()?;
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|n| n.is_finite());
        let Some(number) = number else {
            self.fail(field, "must be a number");
            return None;
        };
        self.in_range(field, number, min, max).then_some(number)
    }

    fn integer(&mut self, field: &str, min: Option<i64>, max: Option<i64>) -> Option<i64> {
        let value = self.given(field, true).flatten()?;
        let integer = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let Some(integer) = integer else {
            self.fail(field, "must be an integer");
            return None;
        };
        self.in_range(field, integer, min, max).then_some(integer)
    }

    fn in_range<T>(&mut self, field: &str, value: T, min: Option<T>, max: Option<T>) -> bool
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if let Some(min) = min {
            if value < min {
                self.fail(field, &format!("must be at least {}", min));
                return false;
            }
        }
        if let Some(max) = max {
            if value > max {
                self.fail(field, &format!("must not be greater than {}", max));
                return false;
            }
        }
        true
    }

    fn fail(&mut self, field: &str, rule: &str) {
        self.errors
            .add(field, format!("The {} field {}.", attribute_name(field), rule));
    }
}

/// Validated values read from a payload. `None` means "not supplied"; the
/// nullable fields use `Some(None)` for an explicit empty value.
#[derive(Default)]
struct HotelDraft {
    name: Option<String>,
    address: Option<String>,
    address2: Option<Option<String>>,
    zipcode: Option<String>,
    city: Option<String>,
    country: Option<String>,
    longitude: Option<f64>,
    latitude: Option<f64>,
    description: Option<Option<String>>,
    max_capacity: Option<i64>,
    price_per_night: Option<f64>,
}

impl HotelDraft {
    fn read(payload: &Value, mode: Mode) -> Result<Self, ValidationErrors> {
        let empty = Map::new();
        let mut r = Reader::new(payload.as_object().unwrap_or(&empty), mode);

        let draft = HotelDraft {
            name: r.string("name", true, Some(NAME_MAX_CHARS)).flatten(),
            address: r.string("address", true, None).flatten(),
            address2: r.string("address2", false, None),
            zipcode: r.string("zipcode", true, Some(ZIPCODE_MAX_CHARS)).flatten(),
            city: r.string("city", true, None).flatten(),
            country: r.string("country", true, None).flatten(),
            longitude: r.number("longitude", Some(LONGITUDE_RANGE.0), Some(LONGITUDE_RANGE.1)),
            latitude: r.number("latitude", Some(LATITUDE_RANGE.0), Some(LATITUDE_RANGE.1)),
            description: r.string("description", false, Some(DESCRIPTION_MAX_CHARS)),
            max_capacity: r.integer(
                "max_capacity",
                Some(MAX_CAPACITY_RANGE.0),
                Some(MAX_CAPACITY_RANGE.1),
            ),
            price_per_night: r.number("price_per_night", Some(PRICE_PER_NIGHT_MIN), None),
        };

        r.errors.into_result(draft)
    }

    fn apply(self, mut base: HotelFields) -> HotelFields {
        if let Some(v) = self.name {
            base.name = v;
        }
        if let Some(v) = self.address {
            base.address = v;
        }
        if let Some(v) = self.address2 {
            base.address2 = v;
        }
        if let Some(v) = self.zipcode {
            base.zipcode = v;
        }
        if let Some(v) = self.city {
            base.city = v;
        }
        if let Some(v) = self.country {
            base.country = v;
        }
        if let Some(v) = self.longitude {
            base.longitude = v;
        }
        if let Some(v) = self.latitude {
            base.latitude = v;
        }
        if let Some(v) = self.description {
            base.description = v;
        }
        if let Some(v) = self.max_capacity {
            base.max_capacity = v;
        }
        if let Some(v) = self.price_per_night {
            base.price_per_night = v;
        }
        base
    }
}
