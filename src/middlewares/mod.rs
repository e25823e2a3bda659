//! 미들웨어 모듈
//!
//! 사용자 라우트 스코프에 적용되는 응답 후처리를 제공합니다.
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::middleware::ErrorHandlers;
//! use actix_web::web;
//! use crate::middlewares::attach_request_path;
//!
//! web::scope("/v1/{requester_id}")
//!     .wrap(ErrorHandlers::new().default_handler(attach_request_path))
//!     .service(handlers::users::create_user)
//! ```

pub mod request_path;

pub use request_path::attach_request_path;
