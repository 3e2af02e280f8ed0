//! # Picture Service Module
//!
//! Routes under `/api/picture`. Pictures are uploaded one at a time against an
//! existing hotel, can be moved to another slideshow position and can be
//! deleted.
//!
//! ## Sub-modules:
//! - `upload`: multipart upload of a single picture.
//! - `update`: changes the `index` of a picture.
//! - `delete`: removes a picture row.

mod delete;
mod update;
pub(crate) mod upload;

use actix_web::web::{delete, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/picture";

/// # Registered Routes:
///
/// *   **`POST /`**: `upload::process`. Multipart with `picture`, `index` and `hotel_id`.
/// *   **`PUT /{id}`**: `update::process`. JSON body `{ "index": n }`.
/// *   **`DELETE /{id}`**: `delete::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(super::path_config("Picture"))
        .route("", post().to(upload::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}
