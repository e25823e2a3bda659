//! # 입력 검증 유틸리티
//!
//! DTO 경계와 저장 프로시저 호출 경계에서 사용하는 순수 검증 함수들입니다.
//! 모든 함수는 실패 시 [`AppError::ValidationError`]를 반환합니다.
//!
//! `validator` 크레이트의 커스텀 검증 함수로도 쓸 수 있도록
//! `*_rule` 형태의 래퍼를 함께 제공합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::errors::AppError;

/// 전화번호: 정확히 10자리 ASCII 숫자
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone regex"));

/// 이메일: `local@domain.tld`
///
/// 도메인과 TLD 사이의 `.`은 임의 문자가 아닌 리터럴 점입니다.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9]{2,255}\.[a-z]{2,}$").expect("valid email regex")
});

/// 저장 프로시저 이름: 영문자로 시작하고 영문자/숫자/언더스코어만 허용
static STORED_PROCEDURE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid stored procedure regex"));

/// 값이 존재하는지 검증하고 내부 값을 꺼냅니다.
///
/// # 예제
///
/// ```rust,ignore
/// let requester_id = validate_not_null(requester_id, "requester_id")?;
/// ```
pub fn validate_not_null<T>(value: Option<T>, field_name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)))
}

/// 문자열이 비어 있거나 공백만으로 이루어지지 않았는지 검증합니다.
pub fn validate_not_blank(value: &str, field_name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if !PHONE_PATTERN.is_match(phone) {
        return Err(AppError::ValidationError(
            "전화번호는 10자리 숫자여야 합니다".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::ValidationError(
            "유효한 이메일 주소를 입력해주세요".to_string(),
        ));
    }
    Ok(())
}

/// 저장 프로시저 이름 형식을 검증합니다.
///
/// 동적으로 만들어지는 호출 구문에 끼워 넣는 모든 이름은 이 검사를 먼저 통과해야 합니다.
/// 설정으로 들어오는 프로시저 이름을 통한 SQL 인젝션을 막는 유일한 경계입니다.
///
/// ```rust,ignore
/// assert!(validate_stored_procedure_name("create_user").is_ok());
/// assert!(validate_stored_procedure_name("drop_table; DROP TABLE users").is_err());
/// ```
pub fn validate_stored_procedure_name(name: &str) -> Result<(), AppError> {
    if !STORED_PROCEDURE_PATTERN.is_match(name) {
        return Err(AppError::ValidationError(format!(
            "저장 프로시저 이름 형식이 올바르지 않습니다: {:?}",
            name
        )));
    }
    Ok(())
}

/// `#[validate(custom(function = "phone_rule"))]`용 래퍼
pub fn phone_rule(phone: &str) -> Result<(), ValidationError> {
    validate_phone(phone).map_err(|_| {
        ValidationError::new("invalid_phone").with_message("전화번호는 10자리 숫자여야 합니다".into())
    })
}

/// `#[validate(custom(function = "email_rule"))]`용 래퍼
pub fn email_rule(email: &str) -> Result<(), ValidationError> {
    validate_email(email).map_err(|_| {
        ValidationError::new("invalid_email").with_message("유효한 이메일 주소를 입력해주세요".into())
    })
}

/// `#[validate(custom(function = "required_rule"))]`용 래퍼
pub fn required_rule(value: &str) -> Result<(), ValidationError> {
    validate_not_blank(value, "value")
        .map_err(|_| ValidationError::new("required").with_message("필수 입력 항목입니다".into()))
}
