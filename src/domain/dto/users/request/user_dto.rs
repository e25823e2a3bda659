//! 사용자 생성 요청 DTO
//!
//! 새 사용자 생성을 위한 입력 데이터 구조입니다.
//! 생성자와 역직렬화 모두 검증을 거치므로, 존재하는 `UserDto`는 항상 유효합니다.
//!
//! ## 검증 규칙
//!
//! - `name`: 필수
//! - `phone`: 정확히 10자리 숫자
//! - `email`: `local@domain.tld` 형식
//! - `administrator`: 선택 (기본값 `false`)
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Mike Selby",
//!   "phone": "8765436548",
//!   "email": "selby@mark.com",
//!   "administrator": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::utils::validation::{email_rule, phone_rule, required_rule};

/// 사용자 생성 요청 DTO
///
/// ID를 갖지 않습니다. ID는 저장소가 부여합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(try_from = "UserDtoPayload")]
pub struct UserDto {
    #[validate(custom(function = "required_rule"))]
    pub(crate) name: String,

    #[validate(custom(function = "phone_rule"))]
    pub(crate) phone: String,

    #[validate(custom(function = "email_rule"))]
    pub(crate) email: String,

    pub(crate) administrator: bool,
}

/// 검증 전 JSON 본문
///
/// 누락된 필드는 빈 문자열로 채워져 역직렬화 오류가 아닌 검증 오류로 보고됩니다.
#[derive(Debug, Deserialize)]
struct UserDtoPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    administrator: bool,
}

impl TryFrom<UserDtoPayload> for UserDto {
    type Error = AppError;

    fn try_from(payload: UserDtoPayload) -> Result<Self, Self::Error> {
        Self::with_administrator(payload.name, payload.phone, payload.email, payload.administrator)
    }
}

impl UserDto {
    /// 일반 사용자 생성 요청을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름 누락, 전화번호/이메일 형식 오류
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        Self::with_administrator(name, phone, email, false)
    }

    /// 관리자 여부를 지정하여 생성 요청을 만듭니다.
    pub fn with_administrator(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        administrator: bool,
    ) -> AppResult<Self> {
        let dto = Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            administrator,
        };
        dto.validate()?;
        Ok(dto)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_administrator(&self) -> bool {
        self.administrator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_dto_valid_input() {
        let dto = UserDto::new("Julie", "7897897280", "abc@de.com").unwrap();

        assert_eq!(dto.name(), "Julie");
        assert!(!dto.is_administrator());
    }

    #[test]
    fn test_create_user_dto_invalid_input() {
        let cases = [
            ("Julie", "78978297a4", "abc@de.com"),
            ("Julie", "789789728", "abc@de.com"),
            ("Julie", "7897839780", "abc@"),
            ("", "7897839780", "abc@de.com"),
            ("Julie", "", "abc@de.com"),
            ("Julie", "7897839780", ""),
        ];

        for (name, phone, email) in cases {
            let result = UserDto::new(name, phone, email);
            assert!(
                matches!(result, Err(AppError::ValidationError(_))),
                "expected validation error for ({:?}, {:?}, {:?})",
                name,
                phone,
                email
            );
        }
    }

    #[test]
    fn test_deserialize_defaults_administrator_to_false() {
        let json = r#"{"name": "Mike", "phone": "8765436548", "email": "selby@mark.com"}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();

        assert!(!dto.is_administrator());
        assert_eq!(dto.email(), "selby@mark.com");
    }

    #[test]
    fn test_deserialize_rejects_invalid_payload() {
        let missing_phone = r#"{"name": "Mike", "email": "selby@mark.com"}"#;
        assert!(serde_json::from_str::<UserDto>(missing_phone).is_err());

        let bad_email = r#"{"name": "Mike", "phone": "8765436548", "email": "selby"}"#;
        assert!(serde_json::from_str::<UserDto>(bad_email).is_err());
    }

    #[test]
    fn test_serialize_profile_blob() {
        let dto = UserDto::with_administrator("King Kong", "9999999999", "king@kong.com", true).unwrap();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "King Kong",
                "phone": "9999999999",
                "email": "king@kong.com",
                "administrator": true
            })
        );
    }
}
