//! `POST /api/hotel/with-pictures`: creates a hotel and its pictures in one request.
//!
//! The multipart body starts with a `hotel` part holding the hotel JSON and
//! continues with any number of `pictures` file parts. Picture `n` (0-based,
//! in upload order) gets index `n` and reports its validation errors under
//! `pictures.<n>`.
//!
//! Every completed step is recorded in a `CreationSaga`. Unless the saga is
//! marked complete, dropping it undoes those steps in reverse order: picture
//! rows are deleted, stored files removed, the hotel row is hard-deleted and
//! its storage directory purged. This also covers requests abandoned by the
//! client halfway through the upload.

use crate::error::{ApiError, ApiResult};
use crate::repository::hotels;
use crate::repository::pictures::{self, NewPicture};
use crate::services::multipart::{part_name, read_text, read_upload};
use crate::services::pictures::upload::{check_picture, CheckedImage};
use crate::state::AppState;
use crate::storage::PictureStorage;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::model::hotel::Hotel;
use common::model::picture::Picture;
use common::validation::{required_message, validate_hotel};
use futures_util::StreamExt;
use log::{info, warn};
use rusqlite::Connection;
use serde_json::Value;
use std::path::PathBuf;

pub async fn process(state: web::Data<AppState>, mut payload: Multipart) -> ApiResult<HttpResponse> {
    let mut saga = CreationSaga::begin(&state)?;
    let mut hotel: Option<Hotel> = None;
    let mut stored: Vec<Picture> = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        match part_name(&field).as_deref() {
            Some("hotel") => {
                if hotel.is_some() {
                    return Err(ApiError::BadRequest("Only one hotel part may be sent".to_string()));
                }
                let text = read_text(&mut field).await?;
                let value: Value = serde_json::from_str(&text)
                    .map_err(|e| ApiError::BadRequest(format!("The hotel part is not valid JSON: {}", e)))?;
                hotel = Some(saga.insert_hotel(&value)?);
            }
            Some("pictures" | "pictures[]") => {
                let Some(hotel) = &hotel else {
                    return Err(ApiError::BadRequest(
                        "The hotel part must be sent before the pictures".to_string(),
                    ));
                };
                let position = stored.len();
                let upload = read_upload(&mut field, state.max_picture_bytes).await?;
                let image = check_picture(
                    Some(upload),
                    &format!("pictures.{}", position),
                    state.max_picture_bytes,
                )?;
                stored.push(saga.add_picture(hotel.id, position as i64, &image)?);
            }
            _ => {}
        }
    }

    let mut hotel = hotel.ok_or_else(|| ApiError::field("hotel", required_message("hotel")))?;
    hotel.pictures = Some(stored);
    saga.complete();

    info!(
        "Created hotel {} ({}) with {} picture(s)",
        hotel.id,
        hotel.fields.name,
        hotel.pictures.as_ref().map_or(0, Vec::len)
    );
    Ok(HttpResponse::Created().json(hotel))
}

/// A side effect that has to be undone if the creation fails.
#[derive(Debug)]
enum Step {
    HotelInserted(i64),
    FileStored(PathBuf),
    PictureInserted(i64),
}

/// Records the side effects of one creation and compensates them on drop.
pub(crate) struct CreationSaga {
    conn: Connection,
    storage: PictureStorage,
    steps: Vec<Step>,
    completed: bool,
}

impl CreationSaga {
    pub(crate) fn begin(state: &AppState) -> ApiResult<Self> {
        Ok(Self {
            conn: state.db.connect()?,
            storage: state.storage.clone(),
            steps: Vec::new(),
            completed: false,
        })
    }

    pub(crate) fn insert_hotel(&mut self, payload: &Value) -> ApiResult<Hotel> {
        let fields = validate_hotel(payload)?;
        let hotel = hotels::insert(&self.conn, &fields)?;
        self.steps.push(Step::HotelInserted(hotel.id));
        Ok(hotel)
    }

    pub(crate) fn add_picture(&mut self, hotel_id: i64, index: i64, image: &CheckedImage) -> ApiResult<Picture> {
        let file = self.storage.store(hotel_id, &image.bytes, image.extension)?;
        self.steps.push(Step::FileStored(file.path.clone()));

        let picture = pictures::insert(
            &self.conn,
            &NewPicture {
                hotel_id,
                file_path: file.url,
                file_size: file.size as i64,
                index,
            },
        )?;
        self.steps.push(Step::PictureInserted(picture.id));
        Ok(picture)
    }

    /// Keeps everything done so far.
    pub(crate) fn complete(mut self) {
        self.completed = true;
    }

    fn undo(&self, step: &Step) -> ApiResult<()> {
        match step {
            Step::PictureInserted(id) => {
                pictures::delete(&self.conn, *id)?;
            }
            Step::FileStored(path) => self.storage.remove(path)?,
            Step::HotelInserted(id) => {
                hotels::hard_delete(&self.conn, *id)?;
                self.storage.purge_hotel(*id)?;
            }
        }
        Ok(())
    }
}

impl Drop for CreationSaga {
    fn drop(&mut self) {
        if self.completed || self.steps.is_empty() {
            return;
        }

        warn!("Hotel creation failed, undoing {} step(s)", self.steps.len());
        let steps = std::mem::take(&mut self.steps);
        for step in steps.iter().rev() {
            if let Err(e) = self.undo(step) {
                warn!("Could not undo {:?}: {}", step, e);
            }
        }
    }
}
