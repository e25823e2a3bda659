//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 입력을 구조화된 Rust 타입으로 변환하고 검증합니다.
//! 모든 DTO는 `serde`의 `try_from`을 통해 역직렬화 시점에 `validator` 검증을 거칩니다.
//!
//! - [`UserDto`] - 사용자 생성 요청 (이름, 전화번호, 이메일, 관리자 여부)
//! - [`UpdateUserDto`] - 사용자 수정 요청 (이름, 전화번호, 이메일)
//!
//! 검증 실패는 `AppError::ValidationError`로 보고되어 400 Bad Request가 됩니다.

pub mod user_dto;
pub mod update_user_dto;

pub use update_user_dto::UpdateUserDto;
pub use user_dto::UserDto;
