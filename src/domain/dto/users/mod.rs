//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청 데이터 구조를 정의합니다.
//! 응답은 [`User`](crate::domain::entities::users::User) 엔티티를 그대로 직렬화합니다.
//!
//! ```text
//! users/
//! └── request/
//!     ├── user_dto.rs         # 사용자 생성 요청
//!     └── update_user_dto.rs  # 사용자 수정 요청
//! ```

pub mod request;
