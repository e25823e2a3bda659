//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 경로/본문 파싱             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService - 권한 정책                         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRepository - 메모리 / 저장 프로시저          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`를 주입받고 `Result<HttpResponse, AppError>`를
//! 반환합니다. 에러는 `AppError`의 `ResponseError` 구현이 상태 코드와
//! JSON 본문으로 변환합니다.

pub mod users;
