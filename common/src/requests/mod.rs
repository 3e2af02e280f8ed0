use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Query string of `GET /api/hotel`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListHotelsQuery {
    /// 1-based page number. Missing, unparsable or < 1 means the first page.
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<i64>,
}

/// Accepts `page=3`, `"page": 3` and `"page": "3"`. Anything else is dropped
/// rather than rejected.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

impl ListHotelsQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).clamp(1, u32::MAX as i64) as u32
    }
}

/// Query string of `GET /api/hotel/{id}`.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShowHotelQuery {
    /// Also return a soft-deleted hotel.
    #[serde(default)]
    pub include_deleted: bool,
}

/// Body of `PUT /api/picture/{id}`.
///
/// The index is kept as raw JSON so that a numeric string from an HTML form
/// and a JSON number are validated by the same rule.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdatePictureIndex {
    #[serde(default)]
    pub index: serde_json::Value,
}
