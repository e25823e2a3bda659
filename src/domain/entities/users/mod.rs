//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::from_dto(Uuid::new_v4(), dto);
//! let updated = user.with_update(update_dto);
//! ```

pub mod user;

pub use user::User;
