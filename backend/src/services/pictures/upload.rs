//! `POST /api/picture`: stores an uploaded image for a hotel.
//!
//! The multipart body carries three parts: `picture` (the file), `index` (its
//! slideshow position) and `hotel_id`. All of them are validated before
//! anything is written. The file then lands in the hotel's storage directory
//! and a picture row is inserted. If the insert fails the file is removed
//! again.

use crate::error::{ApiError, ApiResult};
use crate::repository::hotels;
use crate::repository::pictures::{self, NewPicture};
use crate::services::multipart::{part_name, read_text, read_upload, Upload};
use crate::state::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::picture::Picture;
use common::validation::{attribute_name, required_message, validate_picture_meta, ValidationErrors};
use futures_util::StreamExt;
use log::{info, warn};
use rusqlite::Connection;
use serde_json::{Map, Value};

pub(crate) async fn process(state: web::Data<AppState>, payload: Multipart) -> ApiResult<HttpResponse> {
    let form = PictureForm::read(payload, state.max_picture_bytes).await?;
    let picture = store_picture(&state, form)?;
    info!(
        "Stored picture {} for hotel {} at index {}",
        picture.id, picture.hotel_id, picture.index
    );
    Ok(HttpResponse::Created().json(picture))
}

struct PictureForm {
    fields: Map<String, Value>,
    picture: Option<Upload>,
}

impl PictureForm {
    async fn read(mut payload: Multipart, limit: usize) -> ApiResult<Self> {
        let mut form = PictureForm {
            fields: Map::new(),
            picture: None,
        };

        while let Some(item) = payload.next().await {
            let mut field = item?;
            match part_name(&field).as_deref() {
                Some("picture") => form.picture = Some(read_upload(&mut field, limit).await?),
                Some(name @ ("index" | "hotel_id")) => {
                    let name = name.to_string();
                    let text = read_text(&mut field).await?;
                    form.fields.insert(name, Value::String(text));
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

fn store_picture(state: &AppState, form: PictureForm) -> ApiResult<Picture> {
    let mut errors = ValidationErrors::new();

    let meta = match validate_picture_meta(&Value::Object(form.fields)) {
        Ok(meta) => Some(meta),
        Err(e) => {
            errors.extend(e);
            None
        }
    };
    let image = match check_picture(form.picture, "picture", state.max_picture_bytes) {
        Ok(image) => Some(image),
        Err(e) => {
            errors.extend(e);
            None
        }
    };

    let conn = state.db.connect()?;
    if let Some(meta) = &meta {
        if !hotels::exists(&conn, meta.hotel_id)? {
            errors.add("hotel_id", "The selected hotel id is invalid.");
        }
    }

    match (meta, image) {
        (Some(meta), Some(image)) if errors.is_empty() => {
            save(state, &conn, meta.hotel_id, meta.index, &image)
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

fn save(
    state: &AppState,
    conn: &Connection,
    hotel_id: i64,
    index: i64,
    image: &CheckedImage,
) -> ApiResult<Picture> {
    let stored = state.storage.store(hotel_id, &image.bytes, image.extension)?;
    let new_picture = NewPicture {
        hotel_id,
        file_path: stored.url.clone(),
        file_size: stored.size as i64,
        index,
    };

    let picture = match pictures::insert(conn, &new_picture) {
        Ok(picture) => picture,
        Err(e) => {
            remove_orphan(state, &stored.path);
            return Err(e.into());
        }
    };

    // The hotel may have been deleted, and its directory purged, while the
    // file was being written.
    if !hotels::exists(conn, hotel_id)? {
        pictures::delete(conn, picture.id)?;
        remove_orphan(state, &stored.path);
        return Err(ApiError::field("hotel_id", "The selected hotel id is invalid."));
    }
    Ok(picture)
}

fn remove_orphan(state: &AppState, path: &std::path::Path) {
    if let Err(e) = state.storage.remove(path) {
        warn!("Could not remove orphaned file {}: {}", path.display(), e);
    }
}

/// An uploaded file that passed validation.
#[derive(Debug)]
pub(crate) struct CheckedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Checks that an upload is present, within `limit` and an image. Errors are
/// keyed by `field`.
pub(crate) fn check_picture(
    upload: Option<Upload>,
    field: &str,
    limit: usize,
) -> Result<CheckedImage, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let attr = attribute_name(field);

    match upload {
        None => errors.add(field, required_message(field)),
        Some(Upload::Complete(bytes)) if bytes.is_empty() => errors.add(field, required_message(field)),
        Some(Upload::TooLarge) => errors.add(
            field,
            format!(
                "The {} field must not be greater than {} kilobytes.",
                attr,
                limit / 1024
            ),
        ),
        Some(Upload::Complete(bytes)) => match crate::storage::image_extension(&bytes) {
            Some(extension) => return Ok(CheckedImage { bytes, extension }),
            None => errors.add(field, format!("The {} field must be an image.", attr)),
        },
    }

    Err(errors)
}
