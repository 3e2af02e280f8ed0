//! `GET /api/hotel-ids`: ids of every active hotel, unpaginated.

use crate::error::ApiResult;
use crate::repository::hotels;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

pub async fn process(state: web::Data<AppState>) -> ApiResult<HttpResponse> {
    let conn = state.db.connect()?;
    Ok(HttpResponse::Ok().json(hotels::active_ids(&conn)?))
}
