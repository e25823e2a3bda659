//! # Domain Entities Module
//!
//! 저장소에 영속되는 핵심 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소에 보관되는 엔티티)
//! └── dto/          ← 입력 데이터 전송 객체
//! ```
//!
//! 엔티티는 JSON으로 직렬화되어 HTTP 응답 본문으로도 그대로 사용됩니다.

pub mod users;
