//! HTTP handlers, grouped by resource.
//!
//! Each resource module exposes a `configure_routes()` scope whose handlers
//! live in one sub-module per operation.

pub mod hotels;
mod multipart;
pub mod pictures;

use crate::error::ApiError;
use actix_web::web;

/// Upper bound for JSON request bodies.
const JSON_LIMIT: usize = 1024 * 1024;

/// Registers every API route on an `App`. Also used by the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(hotels::ids_resource())
        .service(hotels::configure_routes())
        .service(pictures::configure_routes());
}

/// Malformed JSON bodies are answered with the usual `ErrorBody` instead of
/// actix-web's plain-text error.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into())
}

/// An id segment that does not parse can never match a row, so it is answered
/// like a missing `entity`.
fn path_config(entity: &'static str) -> web::PathConfig {
    web::PathConfig::default().error_handler(move |_err, _req| ApiError::NotFound(entity).into())
}
