//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 엔티티입니다.
//! 저장소에 존재하는 `User`는 항상 전화번호/이메일 형식을 만족하며,
//! 검증은 DTO 경계에서만 수행되고 조회 시 다시 검증하지 않습니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::dto::users::request::{UpdateUserDto, UserDto};

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 부여하는 식별자 (생성 후 변경 불가)
    pub id: Uuid,
    pub name: String,
    /// 10자리 숫자
    pub phone: String,
    pub email: String,
    /// 관리자 여부 (생성 후 변경 불가)
    #[serde(default)]
    pub administrator: bool,
}

impl User {
    pub fn new(id: Uuid, name: String, phone: String, email: String, administrator: bool) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            administrator,
        }
    }

    /// 생성 요청 DTO와 저장소가 부여한 ID로 새 사용자를 만듭니다.
    pub fn from_dto(id: Uuid, dto: UserDto) -> Self {
        Self {
            id,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            administrator: dto.administrator,
        }
    }

    /// 수정 요청을 반영한 새 사용자를 반환합니다.
    ///
    /// ID와 관리자 여부는 기존 값을 그대로 유지합니다.
    pub fn with_update(&self, dto: UpdateUserDto) -> Self {
        Self {
            id: self.id,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            administrator: self.administrator,
        }
    }

    pub fn is_administrator(&self) -> bool {
        self.administrator
    }
}
