//! `DELETE /api/picture/{id}`: removes a picture row.
//!
//! The stored file stays on disk. It is only removed when its hotel is deleted.

use crate::error::{ApiError, ApiResult};
use crate::repository::pictures;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn process(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let conn = state.db.connect()?;
    if !pictures::delete(&conn, id)? {
        return Err(ApiError::NotFound("Picture"));
    }
    info!("Deleted picture {}", id);
    Ok(HttpResponse::NoContent().finish())
}
