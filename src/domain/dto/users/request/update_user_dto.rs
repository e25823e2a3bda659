//! 사용자 수정 요청 DTO
//!
//! 이름, 전화번호, 이메일만 바꿀 수 있습니다.
//! ID와 관리자 여부는 생성 이후 변경할 수 없으므로 이 DTO에 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::utils::validation::{email_rule, phone_rule, required_rule};

/// 사용자 수정 요청 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(try_from = "UpdateUserDtoPayload")]
pub struct UpdateUserDto {
    #[validate(custom(function = "required_rule"))]
    pub(crate) name: String,

    #[validate(custom(function = "phone_rule"))]
    pub(crate) phone: String,

    #[validate(custom(function = "email_rule"))]
    pub(crate) email: String,
}

#[derive(Debug, Deserialize)]
struct UpdateUserDtoPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
}

impl TryFrom<UpdateUserDtoPayload> for UpdateUserDto {
    type Error = AppError;

    fn try_from(payload: UpdateUserDtoPayload) -> Result<Self, Self::Error> {
        Self::new(payload.name, payload.phone, payload.email)
    }
}

impl UpdateUserDto {
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이름 누락, 전화번호/이메일 형식 오류
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<Self> {
        let dto = Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_user_dto_validation() {
        assert!(UpdateUserDto::new("Rachel", "9876543214", "abc@def.com").is_ok());
        assert!(UpdateUserDto::new("Rachel", "98765", "abc@def.com").is_err());
        assert!(UpdateUserDto::new("Rachel", "9876543214", "abc@def").is_err());
        assert!(UpdateUserDto::new("  ", "9876543214", "abc@def.com").is_err());
    }

    #[test]
    fn test_administrator_field_is_ignored() {
        let json = r#"{"name": "Abc", "phone": "7583929275", "email": "rewr@afsa.com", "administrator": true}"#;
        let dto: UpdateUserDto = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("administrator").is_none());
        assert!(value.get("id").is_none());
    }
}
