//! `PUT` and `PATCH /api/hotel/{id}`.
//!
//! `PUT` validates the complete field set like a creation does. `PATCH`
//! validates only the fields present and merges them onto the stored hotel.
//! In both cases an unknown or deleted hotel is reported before any
//! validation error.

use crate::error::{ApiError, ApiResult};
use crate::repository::hotels::{self, Visibility};
use crate::repository::pictures;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::hotel::{Hotel, HotelFields};
use common::validation::{validate_hotel, validate_hotel_patch, ValidationErrors};
use log::info;
use serde_json::Value;

pub async fn replace(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let hotel = apply(&state, id.into_inner(), |_| validate_hotel(&payload))?;
    Ok(HttpResponse::Ok().json(hotel))
}

pub async fn patch(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let hotel = apply(&state, id.into_inner(), |current| validate_hotel_patch(&payload, current))?;
    Ok(HttpResponse::Ok().json(hotel))
}

fn apply(
    state: &AppState,
    id: i64,
    validate: impl FnOnce(&HotelFields) -> Result<HotelFields, ValidationErrors>,
) -> ApiResult<Hotel> {
    let conn = state.db.connect()?;
    let current = hotels::find(&conn, id, Visibility::ActiveOnly)?.ok_or(ApiError::NotFound("Hotel"))?;

    let fields = validate(&current.fields)?;
    let mut hotel = hotels::update(&conn, id, &fields)?.ok_or(ApiError::NotFound("Hotel"))?;
    hotel.pictures = Some(pictures::for_hotel(&conn, id)?);
    info!("Updated hotel {}", id);
    Ok(hotel)
}

#[cfg(test)]
mod tests {
    use crate::test_support::{create_hotel, sample_payload, test_app, TestContext};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::hotel::Hotel;
    use common::model::response::ErrorBody;
    use serde_json::json;

    #[actix_web::test]
    async fn put_replaces_every_field() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Antiguo").await;

        let mut payload = sample_payload("Hotel Nuevo");
        payload["address2"] = json!(null);
        payload["price_per_night"] = json!("150.5");
        let req = test::TestRequest::put()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let updated: Hotel = test::read_body_json(resp).await;
        assert_eq!(updated.id, hotel.id);
        assert_eq!(updated.fields.name, "Hotel Nuevo");
        assert_eq!(updated.fields.address2, None);
        assert_eq!(updated.fields.price_per_night, 150.5);
        assert!(updated.updated_at >= hotel.updated_at);
    }

    #[actix_web::test]
    async fn put_requires_the_full_field_set() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Entero").await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .set_json(json!({ "name": "Solo nombre" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorBody = test::read_body_json(resp).await;
        let errors = body.errors.unwrap();
        assert!(errors.contains_key("city"));
        assert!(!errors.contains_key("name"));
    }

    #[actix_web::test]
    async fn patch_changes_only_what_is_sent() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Parcial").await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .set_json(json!({ "max_capacity": 80 }))
            .to_request();
        let updated: Hotel = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.fields.max_capacity, 80);
        assert_eq!(updated.fields.name, hotel.fields.name);
        assert_eq!(updated.fields.city, hotel.fields.city);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .set_json(json!({ "name": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.errors.unwrap()["name"], vec!["The name field is required."]);
    }

    #[actix_web::test]
    async fn missing_hotels_are_reported_before_validation() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        let req = test::TestRequest::put()
            .uri("/api/hotel/12")
            .set_json(json!({}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let hotel = create_hotel(&app, "Hotel Borrado").await;
        let req = test::TestRequest::delete()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        test::call_service(&app, req).await;
        let req = test::TestRequest::patch()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .set_json(json!({ "name": "Otra vez" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
