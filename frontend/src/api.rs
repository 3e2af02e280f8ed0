//! Calls to the REST API.
//!
//! Every call resolves to the decoded body or an `ApiFailure`. Only `422`
//! bodies are shown to the user as they are; anything else collapses into a
//! generic message and the details go to the browser console.

use common::model::hotel::Hotel;
use common::model::picture::Picture;
use common::model::response::{Envelope, ErrorBody, Page};
use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use web_sys::{File, FormData};

pub const GENERIC_ERROR: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Field messages of a `422` response.
    Validation(Vec<String>),
    NotFound(String),
    Unexpected,
}

impl ApiFailure {
    /// Classifies a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        match (status, parsed) {
            (422, Some(body)) => ApiFailure::Validation(body.messages()),
            (404, Some(body)) => ApiFailure::NotFound(body.message),
            (404, None) => ApiFailure::NotFound("Not found".to_string()),
            _ => ApiFailure::Unexpected,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiFailure::Validation(messages) => messages.clone(),
            ApiFailure::NotFound(message) => vec![message.clone()],
            ApiFailure::Unexpected => vec![GENERIC_ERROR.to_string()],
        }
    }
}

fn unexpected(context: &str, err: impl std::fmt::Display) -> ApiFailure {
    error!(format!("{}: {}", context, err));
    ApiFailure::Unexpected
}

async fn check(result: Result<Response, gloo_net::Error>, expected: u16) -> Result<Response, ApiFailure> {
    let response = result.map_err(|e| unexpected("Request failed", e))?;
    if response.status() == expected {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(format!("{} -> {}: {}", response.url(), status, body));
    Err(ApiFailure::from_response(status, &body))
}

async fn json_body<T: DeserializeOwned>(
    result: Result<Response, gloo_net::Error>,
    expected: u16,
) -> Result<T, ApiFailure> {
    check(result, expected)
        .await?
        .json::<T>()
        .await
        .map_err(|e| unexpected("Malformed response", e))
}

pub async fn fetch_page(page: u32) -> Result<Page<Hotel>, ApiFailure> {
    json_body(Request::get(&format!("/api/hotel?page={}", page)).send().await, 200).await
}

pub async fn fetch_hotel(id: i64) -> Result<Hotel, ApiFailure> {
    let envelope: Envelope<Hotel> =
        json_body(Request::get(&format!("/api/hotel/{}", id)).send().await, 200).await?;
    Ok(envelope.data)
}

/// Sends the hotel and its pictures in one multipart request. The server
/// either creates everything or nothing.
pub async fn create_hotel_with_pictures(payload: &Value, files: &[File]) -> Result<Hotel, ApiFailure> {
    let form = FormData::new().map_err(|e| unexpected("FormData", format!("{:?}", e)))?;
    form.append_with_str("hotel", &payload.to_string())
        .map_err(|e| unexpected("FormData", format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename("pictures", file, &file.name())
            .map_err(|e| unexpected("FormData", format!("{:?}", e)))?;
    }

    let request = Request::post("/api/hotel/with-pictures")
        .body(form)
        .map_err(|e| unexpected("Building request", e))?;
    json_body(request.send().await, 201).await
}

pub async fn update_hotel(id: i64, payload: &Value) -> Result<Hotel, ApiFailure> {
    let request = Request::put(&format!("/api/hotel/{}", id))
        .json(payload)
        .map_err(|e| unexpected("Building request", e))?;
    json_body(request.send().await, 200).await
}

pub async fn delete_hotel(id: i64) -> Result<(), ApiFailure> {
    check(Request::delete(&format!("/api/hotel/{}", id)).send().await, 204).await?;
    Ok(())
}

pub async fn update_picture_index(id: i64, index: &str) -> Result<Picture, ApiFailure> {
    let request = Request::put(&format!("/api/picture/{}", id))
        .json(&json!({ "index": index }))
        .map_err(|e| unexpected("Building request", e))?;
    json_body(request.send().await, 200).await
}

pub async fn delete_picture(id: i64) -> Result<(), ApiFailure> {
    check(Request::delete(&format!("/api/picture/{}", id)).send().await, 204).await?;
    Ok(())
}
