//! `PUT /api/picture/{id}`: moves a picture to another slideshow position.

use crate::error::{ApiError, ApiResult};
use crate::repository::pictures;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::UpdatePictureIndex;
use common::validation::validate_index;
use log::info;

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<UpdatePictureIndex>,
) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let conn = state.db.connect()?;
    if pictures::find(&conn, id)?.is_none() {
        return Err(ApiError::NotFound("Picture"));
    }

    let index = validate_index(&body.index)?;
    let picture = pictures::update_index(&conn, id, index)?.ok_or(ApiError::NotFound("Picture"))?;
    info!("Moved picture {} to index {}", picture.id, picture.index);
    Ok(HttpResponse::Ok().json(picture))
}
