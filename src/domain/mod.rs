//! # Domain Layer Module
//!
//! 사용자 도메인의 값 타입을 모아 둔 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 저장소에 보관되는 User
//! └── dto       - 생성/수정 요청 (UserDto, UpdateUserDto)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! DTO는 생성 시점에 검증되며, 엔티티는 검증된 DTO로부터만 만들어집니다.

pub mod entities;
pub mod dto;
