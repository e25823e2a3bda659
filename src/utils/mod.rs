//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`validation`] - 널/전화번호/이메일/저장 프로시저 이름 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::{validate_phone, validate_stored_procedure_name};
//!
//! validate_phone("7897897280")?;
//! validate_stored_procedure_name("create_user")?;
//! ```

pub mod validation;
