//! # Route Configuration
//!
//! 모든 HTTP 라우트를 등록합니다.
//!
//! | 경로 | 설명 |
//! |------|------|
//! | `/health` | 헬스 체크 |
//! | `/v1/{requester_id}/user[/{user_id}]` | 사용자 관리 |
//!
//! JSON 본문 역직렬화 실패(필수 필드 누락, 형식 검증 실패 포함)는
//! `AppError::ValidationError`로 변환되어 400으로 응답합니다.
//! 사용자 라우트의 에러 본문에는 요청 경로(`path`)가 포함됩니다.

use actix_web::middleware::ErrorHandlers;
use actix_web::{HttpRequest, HttpResponse, error, get, web};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::attach_request_path;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/{requester_id}")
            .wrap(ErrorHandlers::new().default_handler(attach_request_path))
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
