//! `POST /api/hotel`: validates a JSON hotel payload and inserts it.

use crate::error::ApiResult;
use crate::repository::hotels;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::validation::validate_hotel;
use log::info;
use serde_json::Value;

pub async fn process(state: web::Data<AppState>, payload: web::Json<Value>) -> ApiResult<HttpResponse> {
    let fields = validate_hotel(&payload)?;
    let conn = state.db.connect()?;
    let hotel = hotels::insert(&conn, &fields)?;
    info!("Created hotel {} ({})", hotel.id, hotel.fields.name);
    Ok(HttpResponse::Created().json(hotel))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{sample_payload, test_app, TestContext};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use common::model::hotel::{Hotel, HotelStatus};
    use common::model::response::ErrorBody;
    use serde_json::json;

    #[actix_web::test]
    async fn creates_an_active_hotel() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        let req = test::TestRequest::post()
            .uri("/api/hotel")
            .set_json(sample_payload("Hotel Central"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let hotel: Hotel = test::read_body_json(resp).await;
        assert!(hotel.id > 0);
        assert_eq!(hotel.fields.name, "Hotel Central");
        assert_eq!(hotel.status, HotelStatus::Active);
        assert_eq!(ctx.hotel_rows(), 1);
    }

    #[actix_web::test]
    async fn one_bad_field_gives_one_keyed_error_and_no_row() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        let mut payload = sample_payload("Hotel Polar");
        payload["latitude"] = json!(90.0001);
        let req = test::TestRequest::post().uri("/api/hotel").set_json(payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.message, "Validation error");
        let errors = body.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors["latitude"],
            vec!["The latitude field must not be greater than 90."]
        );
        assert_eq!(ctx.hotel_rows(), 0);
    }

    #[actix_web::test]
    async fn boundaries_are_inclusive() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        for (field, value, status) in [
            ("latitude", json!(90), StatusCode::CREATED),
            ("latitude", json!(-90), StatusCode::CREATED),
            ("latitude", json!(-90.0001), StatusCode::UNPROCESSABLE_ENTITY),
            ("max_capacity", json!(1), StatusCode::CREATED),
            ("max_capacity", json!(200), StatusCode::CREATED),
            ("max_capacity", json!(0), StatusCode::UNPROCESSABLE_ENTITY),
            ("max_capacity", json!(201), StatusCode::UNPROCESSABLE_ENTITY),
        ] {
            let mut payload = sample_payload("Hotel Borde");
            payload[field] = value.clone();
            let req = test::TestRequest::post().uri("/api/hotel").set_json(payload).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), status, "{} = {}", field, value);
        }
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);

        let req = test::TestRequest::post()
            .uri("/api/hotel")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(!body.success);
    }
}
