//! 사용자 관리 서비스 모듈
//!
//! 요청자 기준 권한 정책을 적용하는 [`UserService`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repo);
//! let user = user_service.get_user(Some(requester_id), Some(user_id)).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
