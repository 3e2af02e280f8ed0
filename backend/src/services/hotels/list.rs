//! `GET /api/hotel?page=N`: one page of active hotels, each with its pictures.

use crate::error::ApiResult;
use crate::repository::{hotels, pictures};
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::response::{Page, PageMeta, PAGE_SIZE};
use common::requests::ListHotelsQuery;

pub async fn process(
    state: web::Data<AppState>,
    query: web::Query<ListHotelsQuery>,
) -> ApiResult<HttpResponse> {
    let page = query.page();
    let conn = state.db.connect()?;

    let total = hotels::count_active(&conn)?;
    let mut data = hotels::page(&conn, page, PAGE_SIZE)?;
    pictures::attach(&conn, &mut data)?;

    Ok(HttpResponse::Ok().json(Page {
        data,
        meta: PageMeta::new(page, PAGE_SIZE, total),
    }))
}
