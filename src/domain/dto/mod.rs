//! # Data Transfer Objects
//!
//! 클라이언트와 서비스 사이의 입력 계약을 정의합니다.

pub mod users;
