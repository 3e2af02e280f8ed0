//! `GET /api/hotel/{id}`: one hotel with its pictures, wrapped as `{ "data": ... }`.
//!
//! Soft-deleted hotels are only returned with `?include_deleted=true`.

use crate::error::{ApiError, ApiResult};
use crate::repository::hotels::{self, Visibility};
use crate::repository::pictures;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::response::Envelope;
use common::requests::ShowHotelQuery;

pub async fn process(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    query: web::Query<ShowHotelQuery>,
) -> ApiResult<HttpResponse> {
    let visibility = if query.include_deleted {
        Visibility::IncludeDeleted
    } else {
        Visibility::ActiveOnly
    };

    let conn = state.db.connect()?;
    let mut hotel = hotels::find(&conn, id.into_inner(), visibility)?.ok_or(ApiError::NotFound("Hotel"))?;
    hotel.pictures = Some(pictures::for_hotel(&conn, hotel.id)?);

    Ok(HttpResponse::Ok().json(Envelope { data: hotel }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{create_hotel, test_app, upload_picture, TestContext};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::hotel::Hotel;
    use common::model::response::{Envelope, ErrorBody};

    #[actix_web::test]
    async fn returns_the_hotel_with_ordered_pictures() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Vista").await;
        let back = upload_picture(&app, hotel.id, 2).await;
        let front = upload_picture(&app, hotel.id, 0).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        let body: Envelope<Hotel> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.data.fields, hotel.fields);
        let ids: Vec<i64> = body.data.pictures.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![front.id, back.id]);
    }

    #[actix_web::test]
    async fn unknown_hotels_are_not_found() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        let req = test::TestRequest::get().uri("/api/hotel/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.message, "Hotel not found");
        assert!(body.errors.is_none());
    }

    #[actix_web::test]
    async fn deleted_hotels_need_include_deleted() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Viejo").await;
        let req = test::TestRequest::delete()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get()
            .uri(&format!("/api/hotel/{}?include_deleted=true", hotel.id))
            .to_request();
        let body: Envelope<Hotel> = test::call_and_read_body_json(&app, req).await;
        assert!(body.data.is_deleted());
        assert!(body.data.deleted_at.is_some());
    }
}
