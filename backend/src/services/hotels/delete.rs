//! `DELETE /api/hotel/{id}`: soft-deletes the hotel, then removes every stored
//! picture file of it. Picture rows are kept with the hotel row.
//!
//! The soft delete comes first so that an upload racing with the delete either
//! sees the hotel gone or lands before the purge.

use crate::error::{ApiError, ApiResult};
use crate::repository::hotels;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

pub async fn process(state: web::Data<AppState>, id: web::Path<i64>) -> ApiResult<HttpResponse> {
    let id = id.into_inner();
    let conn = state.db.connect()?;
    if !hotels::soft_delete(&conn, id)? {
        return Err(ApiError::NotFound("Hotel"));
    }

    let removed = state.storage.purge_hotel(id)?;
    info!("Deleted hotel {} and {} stored picture file(s)", id, removed);
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{create_hotel, test_app, upload_picture, TestContext};
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn delete_purges_files_then_hides_the_hotel() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Fin").await;
        let other = create_hotel(&app, "Hotel Sigue").await;
        for index in 0..3 {
            upload_picture(&app, hotel.id, index).await;
        }
        upload_picture(&app, other.id, 0).await;
        assert_eq!(ctx.state.storage.count_files(hotel.id).unwrap(), 3);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        assert_eq!(ctx.state.storage.count_files(hotel.id).unwrap(), 0);
        assert!(!ctx.state.storage.hotel_dir(hotel.id).exists());
        assert_eq!(ctx.state.storage.count_files(other.id).unwrap(), 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/hotel/{}", hotel.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn deleting_twice_is_not_found() {
        let ctx = TestContext::new();
        let app = test_app!(ctx.state);
        let hotel = create_hotel(&app, "Hotel Dos Veces").await;

        let uri = format!("/api/hotel/{}", hotel.id);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        let req = test::TestRequest::delete().uri(&uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
        assert_eq!(ctx.hotel_rows(), 1);
    }
}
