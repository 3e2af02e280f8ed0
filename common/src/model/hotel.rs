use crate::model::picture::Picture;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a hotel row.
///
/// Deleting a hotel never removes its row: the status flips to `Deleted` and
/// the row disappears from every standard lookup. Only lookups that explicitly
/// ask for deleted records still see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HotelStatus {
    #[default]
    Active,
    Deleted,
}

impl HotelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelStatus::Active => "active",
            HotelStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for HotelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(HotelStatus::Active),
            "deleted" => Ok(HotelStatus::Deleted),
            other => Err(format!("unknown hotel status '{}'", other)),
        }
    }
}

/// The user-editable attributes of a hotel, already validated.
///
/// Produced by `validation::validate_hotel` (full field set) or
/// `validation::validate_hotel_patch` (partial field set merged onto the
/// stored values).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HotelFields {
    pub name: String,
    pub address: String,
    pub address2: Option<String>,
    pub zipcode: String,
    pub city: String,
    pub country: String,
    pub longitude: f64,
    pub latitude: f64,
    pub description: Option<String>,
    pub max_capacity: i64,
    pub price_per_night: f64,
}

/// A persisted hotel.
///
/// `pictures` is only present when the response carries the picture
/// collection. A plain create (`POST /api/hotel`) omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    #[serde(flatten)]
    pub fields: HotelFields,
    pub status: HotelStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Vec<Picture>>,
}

impl Hotel {
    pub fn is_deleted(&self) -> bool {
        self.status == HotelStatus::Deleted
    }
}
