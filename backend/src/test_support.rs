//! Fixtures shared by the handler and repository tests.

use crate::db::Database;
use crate::state::AppState;
use crate::storage::PictureStorage;
use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test::{self, TestRequest};
use common::model::hotel::{Hotel, HotelFields};
use common::model::picture::Picture;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

/// Smallest byte sequences `image::guess_format` recognises.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x06\0\0\0";
pub const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0\x80\0\0\0\0\0\xff\xff\xff";

/// A database and storage root inside a temporary directory that is removed
/// when the context is dropped.
pub struct TestContext {
    pub state: AppState,
    _dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("hotels.sqlite"));
        db.migrate().unwrap();
        let state = AppState {
            db,
            storage: PictureStorage::new(dir.path().join("storage"), "http://localhost:8080"),
            max_picture_bytes: 10 * 1024 * 1024,
        };
        Self { state, _dir: dir }
    }

    /// Hotel rows, soft-deleted ones included.
    pub fn hotel_rows(&self) -> i64 {
        self.count("SELECT COUNT(*) FROM hotels")
    }

    pub fn picture_rows(&self) -> i64 {
        self.count("SELECT COUNT(*) FROM pictures")
    }

    /// Files under the storage root, across all hotels.
    pub fn stored_files(&self) -> usize {
        count_files(self.state.storage.root())
    }

    fn count(&self, sql: &str) -> i64 {
        let conn = self.state.db.connect().unwrap();
        conn.query_row(sql, [], |row| row.get(0)).unwrap()
    }
}

fn count_files(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .map(|e| e.unwrap().path())
            .map(|p| if p.is_dir() { count_files(&p) } else { 1 })
            .sum(),
        Err(_) => 0,
    }
}

pub fn sample_fields(name: &str) -> HotelFields {
    HotelFields {
        name: name.to_string(),
        address: "Calle Mayor 1".to_string(),
        address2: Some("Planta 2".to_string()),
        zipcode: "28013".to_string(),
        city: "Madrid".to_string(),
        country: "Spain".to_string(),
        longitude: -3.7038,
        latitude: 40.4168,
        description: Some("Near the square.".to_string()),
        max_capacity: 120,
        price_per_night: 89.9,
    }
}

pub fn sample_payload(name: &str) -> Value {
    json!({
        "name": name,
        "address": "Calle Mayor 1",
        "address2": "Planta 2",
        "zipcode": "28013",
        "city": "Madrid",
        "country": "Spain",
        "longitude": -3.7038,
        "latitude": 40.4168,
        "description": "Near the square.",
        "max_capacity": 120,
        "price_per_night": 89.9,
    })
}

/// Builds the API under test on top of an `AppState`.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(crate::services::configure),
        )
        .await
    };
}
pub(crate) use test_app;

pub async fn create_hotel<S, B>(app: &S, name: &str) -> Hotel
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = TestRequest::post()
        .uri("/api/hotel")
        .set_json(sample_payload(name))
        .to_request();
    test::call_and_read_body_json(app, req).await
}

pub async fn upload_picture<S, B>(app: &S, hotel_id: i64, index: i64) -> Picture
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = MultipartBody::new()
        .file("picture", "photo.png", "image/png", PNG_BYTES)
        .text("index", &index.to_string())
        .text("hotel_id", &hotel_id.to_string())
        .into_request("/api/picture");
    test::call_and_read_body_json(app, req).await
}

/// Hand-built `multipart/form-data` body.
pub struct MultipartBody {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "hotel-test-boundary",
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str) -> Request {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        TestRequest::post()
            .uri(uri)
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={}", self.boundary),
            ))
            .set_payload(self.body)
            .to_request()
    }
}
