//! The single error type returned by every API handler.
//!
//! `ApiError` implements actix-web's `ResponseError`, so handlers return
//! `Result<HttpResponse, ApiError>` and propagate with `?`. Every variant is
//! rendered as a JSON `ErrorBody`:
//!
//! - `Validation` → `422` with per-field messages.
//! - `NotFound` → `404`.
//! - `BadRequest` / `Multipart` → `400`.
//! - `Database` / `Io` → `500`. The cause is logged, the body stays generic.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::response::ErrorBody;
use common::validation::ValidationErrors;
use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(#[from] ValidationErrors),

    /// The named entity does not exist, or is soft-deleted.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Shorthand for a validation failure on a single field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        ApiError::Validation(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation(errors) => ErrorBody {
                success: false,
                message: self.to_string(),
                errors: Some(errors.clone().into_map()),
            },
            ApiError::Database(_) | ApiError::Io(_) => {
                error!("{}", self);
                ErrorBody::new("Internal server error")
            }
            _ => ErrorBody::new(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
