//! Form state and the conversions between stored hotels and form values.
//!
//! Inputs are kept as the raw strings the user typed. They are sent as such;
//! the validation rules accept numeric strings for numeric fields.

use crate::helpers::{compute_md5, sorted_pictures};
use common::model::hotel::{Hotel, HotelFields};
use common::model::picture::Picture;
use common::validation::HOTEL_FIELDS;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use web_sys::File;

pub struct HotelForm {
    /// `None` while creating.
    pub hotel_id: Option<i64>,
    /// Raw input per field name.
    pub values: BTreeMap<&'static str, String>,
    /// Pictures picked for a new hotel, in upload order.
    pub files: Vec<File>,
    /// Stored pictures of the edited hotel, in slideshow order.
    pub pictures: Vec<Picture>,
    /// Index input per picture id.
    pub picture_indexes: HashMap<i64, String>,
    pub errors: Vec<String>,
    pub submitting: bool,
    /// Waiting for the edited hotel to load.
    pub loading: bool,
    /// MD5 of the payload as last loaded or saved.
    pub original_md5: String,
}

impl HotelForm {
    pub fn new(hotel_id: Option<i64>) -> Self {
        let values = empty_values();
        let original_md5 = compute_md5(&payload_from(&values).to_string());
        Self {
            hotel_id,
            values,
            files: Vec::new(),
            pictures: Vec::new(),
            picture_indexes: HashMap::new(),
            errors: Vec::new(),
            submitting: false,
            loading: hotel_id.is_some(),
            original_md5,
        }
    }

    pub fn load(&mut self, hotel: Hotel) {
        self.values = values_from(&hotel.fields);
        self.set_pictures(sorted_pictures(&hotel));
        self.original_md5 = compute_md5(&self.payload().to_string());
        self.loading = false;
    }

    pub fn set_pictures(&mut self, pictures: Vec<Picture>) {
        self.picture_indexes = pictures.iter().map(|p| (p.id, p.index.to_string())).collect();
        self.pictures = pictures;
    }

    pub fn payload(&self) -> Value {
        payload_from(&self.values)
    }

    pub fn is_dirty(&self) -> bool {
        !self.files.is_empty() || compute_md5(&self.payload().to_string()) != self.original_md5
    }
}

pub fn empty_values() -> BTreeMap<&'static str, String> {
    HOTEL_FIELDS.iter().map(|field| (*field, String::new())).collect()
}

/// Form values showing a stored hotel.
pub fn values_from(fields: &HotelFields) -> BTreeMap<&'static str, String> {
    let mut values = empty_values();
    for (field, value) in values.iter_mut() {
        *value = match *field {
            "name" => fields.name.clone(),
            "address" => fields.address.clone(),
            "address2" => fields.address2.clone().unwrap_or_default(),
            "zipcode" => fields.zipcode.clone(),
            "city" => fields.city.clone(),
            "country" => fields.country.clone(),
            "longitude" => fields.longitude.to_string(),
            "latitude" => fields.latitude.to_string(),
            "description" => fields.description.clone().unwrap_or_default(),
            "max_capacity" => fields.max_capacity.to_string(),
            "price_per_night" => fields.price_per_night.to_string(),
            _ => String::new(),
        };
    }
    values
}

/// The JSON body sent for the form: every field as the string typed.
pub fn payload_from(values: &BTreeMap<&'static str, String>) -> Value {
    let object: Map<String, Value> = values
        .iter()
        .map(|(field, value)| (field.to_string(), Value::String(value.clone())))
        .collect();
    Value::Object(object)
}
