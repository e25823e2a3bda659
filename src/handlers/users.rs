//! # User Management HTTP Handlers
//!
//! 요청자 ID를 경로로 받아 [`UserService`]로 전달하는 얇은 어댑터입니다.
//! 권한 판단은 모두 서비스 계층에서 하며, 핸들러는 경로/본문 파싱과
//! 상태 코드 선택만 담당합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/{requester_id}/user` | 사용자 생성 (관리자) | 201 Created |
//! | `GET` | `/v1/{requester_id}/user/{user_id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/v1/{requester_id}/user/{user_id}` | 본인 프로필 수정 | 200 OK |
//! | `DELETE` | `/v1/{requester_id}/user/{user_id}` | 본인 계정 삭제 | 204 No Content |
//!
//! 잘못된 UUID 경로나 본문은 400과 [`ErrorResponse`](crate::errors::ErrorResponse) 본문으로 응답합니다.
//!
//! ```bash
//! curl -X POST http://localhost:8080/v1/f994c61d-ebd1-463c-a8d8-ebe5989aa501/user \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Mike Selby", "phone": "8765436548", "email": "selby@mark.com"}'
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::domain::dto::users::request::{UpdateUserDto, UserDto};
use crate::errors::{AppError, AppResult};
use crate::services::users::UserService;

/// 경로 세그먼트를 UUID로 변환합니다.
fn parse_id(raw: &str, field: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::ValidationError(format!("{} is not a valid UUID: {}", field, raw)))
}

/// 사용자 생성 핸들러
///
/// 관리자 요청자만 호출할 수 있으며, 생성된 사용자를 201로 돌려줍니다.
///
/// ## 요청 본문
///
/// ```json
/// { "name": "Mike Selby", "phone": "8765436548", "email": "selby@mark.com" }
/// ```
#[post("/user")]
pub async fn create_user(
    service: web::Data<UserService>,
    path: web::Path<(String,)>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let (requester,) = path.into_inner();
    let requester_id = parse_id(&requester, "Requester id")?;

    let user = service
        .create_user(Some(requester_id), Some(payload.into_inner()))
        .await?;

    Ok(HttpResponse::Created().json(user))
}

#[get("/user/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (requester, user) = path.into_inner();
    let requester_id = parse_id(&requester, "Requester id")?;
    let user_id = parse_id(&user, "User id")?;

    let user = service.get_user(Some(requester_id), Some(user_id)).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 본인 프로필 수정 핸들러
///
/// 본문은 `name`, `phone`, `email`만 받으며 관리자 여부는 바꿀 수 없습니다.
#[put("/user/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdateUserDto>,
) -> Result<HttpResponse, AppError> {
    let (requester, user) = path.into_inner();
    let requester_id = parse_id(&requester, "Requester id")?;
    let user_id = parse_id(&user, "User id")?;

    let user = service
        .update_user(Some(requester_id), Some(user_id), Some(payload.into_inner()))
        .await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/user/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (requester, user) = path.into_inner();
    let requester_id = parse_id(&requester, "Requester id")?;
    let user_id = parse_id(&user, "User id")?;

    service.delete_user(Some(requester_id), Some(user_id)).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::entities::users::User;
    use crate::repositories::users::{DEFAULT_ADMINISTRATOR_ID, DEFAULT_USER_ID, InMemoryUserRepository};
    use crate::routes::configure_all_routes;

    fn service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserRepository::new())))
    }

    fn user_path(requester: Uuid, user: Uuid) -> String {
        format!("/v1/{}/user/{}", requester, user)
    }

    #[actix_web::test]
    async fn test_create_user_returns_created() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/v1/{}/user", DEFAULT_ADMINISTRATOR_ID))
            .set_json(json!({"name": "Mike Selby", "phone": "8765436548", "email": "selby@mark.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: User = test::read_body_json(resp).await;
        assert_eq!(created.name, "Mike Selby");
        assert!(!created.is_administrator());
    }

    #[actix_web::test]
    async fn test_create_user_by_non_administrator_is_forbidden() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/v1/{}/user", DEFAULT_USER_ID))
            .set_json(json!({"name": "Mike Selby", "phone": "8765436548", "email": "selby@mark.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 403);
        assert_eq!(
            body["message"],
            "Forbidden: Requester is not an administrator and cannot request user creation."
        );
        assert_eq!(body["path"], format!("/v1/{}/user", DEFAULT_USER_ID));
    }

    #[actix_web::test]
    async fn test_invalid_body_is_bad_request() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri(&format!("/v1/{}/user", DEFAULT_ADMINISTRATOR_ID))
            .set_json(json!({"name": "Mike Selby", "phone": "876543654", "email": "selby@mark.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["path"], format!("/v1/{}/user", DEFAULT_ADMINISTRATOR_ID));
    }

    #[actix_web::test]
    async fn test_invalid_path_id_is_bad_request() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/v1/not-a-uuid/user/{}", DEFAULT_USER_ID))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_get_user_status_codes() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let cases = [
            (DEFAULT_ADMINISTRATOR_ID, DEFAULT_USER_ID, StatusCode::OK),
            (DEFAULT_USER_ID, DEFAULT_USER_ID, StatusCode::OK),
            (DEFAULT_USER_ID, DEFAULT_ADMINISTRATOR_ID, StatusCode::FORBIDDEN),
            (DEFAULT_ADMINISTRATOR_ID, Uuid::new_v4(), StatusCode::NOT_FOUND),
            (Uuid::new_v4(), DEFAULT_USER_ID, StatusCode::UNAUTHORIZED),
        ];

        for (requester, user, expected) in cases {
            let req = test::TestRequest::get().uri(&user_path(requester, user)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected, "{} -> {}", requester, user);
        }
    }

    #[actix_web::test]
    async fn test_update_own_profile() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::put()
            .uri(&user_path(DEFAULT_USER_ID, DEFAULT_USER_ID))
            .set_json(json!({"name": "Rachel", "phone": "9876543214", "email": "abc@def.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let updated: User = test::read_body_json(resp).await;
        assert_eq!(updated.id, DEFAULT_USER_ID);
        assert_eq!(updated.name, "Rachel");
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let app = test::init_service(App::new().app_data(service()).configure(configure_all_routes)).await;

        let req = test::TestRequest::delete()
            .uri(&user_path(DEFAULT_ADMINISTRATOR_ID, DEFAULT_USER_ID))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::delete()
            .uri(&user_path(DEFAULT_USER_ID, DEFAULT_USER_ID))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&user_path(DEFAULT_ADMINISTRATOR_ID, DEFAULT_USER_ID))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }
}
