//! # Hotel Service Module
//!
//! Routes under `/api/hotel`, plus the flat id listing at `/api/hotel-ids`.
//!
//! ## Sub-modules:
//! - `list`: paginated listing of active hotels with their pictures.
//! - `ids`: every active hotel id.
//! - `create`: creates a hotel from JSON.
//! - `create_with_pictures`: creates a hotel and its pictures in one request.
//! - `get`: a single hotel with its pictures.
//! - `update`: full (`PUT`) and partial (`PATCH`) updates.
//! - `delete`: purges stored files and soft-deletes the hotel.

mod create;
mod create_with_pictures;
mod delete;
mod get;
mod ids;
mod list;
mod update;

use actix_web::web::{self, get, patch, post, put, scope};
use actix_web::{Resource, Scope};

const API_PATH: &str = "/api/hotel";

/// # Registered Routes:
///
/// *   **`GET /`**: `list::process`. `?page=N`, 10 hotels per page.
/// *   **`POST /`**: `create::process`. JSON hotel payload.
/// *   **`POST /with-pictures`**: `create_with_pictures::process`. Multipart with a
///     `hotel` JSON part followed by `pictures` file parts.
/// *   **`GET /{id}`**: `get::process`. `?include_deleted=true` also returns
///     soft-deleted hotels.
/// *   **`PUT /{id}`**: `update::replace`.
/// *   **`PATCH /{id}`**: `update::patch`.
/// *   **`DELETE /{id}`**: `delete::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .app_data(super::path_config("Hotel"))
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/with-pictures", post().to(create_with_pictures::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::replace))
        .route("/{id}", patch().to(update::patch))
        .route("/{id}", web::delete().to(delete::process))
}

/// `GET /api/hotel-ids`. Lives outside the `/api/hotel` scope.
pub fn ids_resource() -> Resource {
    web::resource("/api/hotel-ids").route(get().to(ids::process))
}
