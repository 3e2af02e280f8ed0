//! Response envelopes returned by the REST API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of hotels per listing page.
pub const PAGE_SIZE: u32 = 10;

/// Wraps a single resource as `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl PageMeta {
    /// Builds the metadata for `current_page`. An empty listing still has one
    /// (empty) page.
    pub fn new(current_page: u32, per_page: u32, total: u64) -> Self {
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page as u64).max(1) as u32;
        Self {
            current_page,
            last_page,
            per_page,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Body of every non-2xx API response.
///
/// `errors` is only present for validation failures, where it maps each
/// offending field to its messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }

    /// All field messages in field order, or the top-level message when the
    /// body carries no field errors.
    pub fn messages(&self) -> Vec<String> {
        match &self.errors {
            Some(errors) if !errors.is_empty() => errors.values().flatten().cloned().collect(),
            _ => vec![self.message.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(PageMeta::new(1, 10, 0).last_page, 1);
        assert_eq!(PageMeta::new(1, 10, 10).last_page, 1);
        assert_eq!(PageMeta::new(1, 10, 11).last_page, 2);
        assert_eq!(PageMeta::new(3, 10, 25).last_page, 3);
    }

    #[test]
    fn navigation_flags() {
        let meta = PageMeta::new(2, 10, 25);
        assert!(meta.has_previous());
        assert!(meta.has_next());
        let last = PageMeta::new(3, 10, 25);
        assert!(!last.has_next());
    }

    #[test]
    fn messages_flatten_field_errors() {
        let body: ErrorBody = serde_json::from_str(
            r#"{
                "success": false,
                "message": "Validation error",
                "errors": {
                    "latitude": ["The latitude field must not be greater than 90."],
                    "longitude": ["The longitude field must be at least -180."]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            body.messages(),
            vec![
                "The latitude field must not be greater than 90.".to_string(),
                "The longitude field must be at least -180.".to_string(),
            ]
        );
        assert_eq!(ErrorBody::new("Hotel not found").messages(), vec!["Hotel not found"]);
    }
}
