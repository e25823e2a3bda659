//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait이 서비스 계층이 사용하는 저장소 계약이며,
//! 두 가지 구현을 제공합니다.
//!
//! - [`InMemoryUserRepository`] - 프로세스 메모리, 개발/테스트용
//! - [`PostgresUserRepository`] - PostgreSQL 저장 프로시저 호출
//!
//! 구현은 시작 시점에 하나를 골라 `Arc<dyn UserRepository>`로 서비스에 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let admin = repo.default_administrator().clone();
//! let found = repo.get(admin.id).await?;
//! ```

pub mod memory_repo;
pub mod postgres_repo;

pub use memory_repo::InMemoryUserRepository;
pub use postgres_repo::PostgresUserRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::dto::users::request::{UpdateUserDto, UserDto};
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 기본 관리자 계정 ID
pub const DEFAULT_ADMINISTRATOR_ID: Uuid = Uuid::from_u128(0xf994c61d_ebd1_463c_a8d8_ebe5989aa501);

/// 기본 사용자 계정 ID
pub const DEFAULT_USER_ID: Uuid = Uuid::from_u128(0x1109a8c8_49a3_4921_aa80_65e730d587fe);

/// 사용자 저장소 계약
///
/// 사용자는 ID로 유일하게 식별되며 저장 순서는 의미가 없습니다.
/// 모든 구현은 초기화 시점부터 기본 관리자와 기본 사용자 두 계정을 보유합니다.
///
/// ## 에러
///
/// - `get`/`update`/`delete`: 대상이 없으면 `AppError::NotFound`
/// - 저장소 인프라 오류는 `DatabaseError`/`TimeoutError` 등으로 그대로 전달되며
///   도메인 에러로 변환하지 않습니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장소가 ID를 부여하여 새 사용자를 만듭니다.
    async fn create(&self, dto: UserDto) -> AppResult<User>;

    async fn get(&self, id: Uuid) -> AppResult<User>;

    /// ID와 관리자 여부는 유지하고 나머지 필드를 교체합니다.
    async fn update(&self, id: Uuid, dto: UpdateUserDto) -> AppResult<()>;

    /// 영구 삭제합니다. 소프트 삭제는 없습니다.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    fn default_administrator(&self) -> &User;

    fn default_user(&self) -> &User;
}

/// 기본 관리자 계정의 생성 요청
pub fn default_administrator_seed() -> (Uuid, UserDto) {
    (
        DEFAULT_ADMINISTRATOR_ID,
        UserDto {
            name: "King Kong".to_string(),
            phone: "9999999999".to_string(),
            email: "king@kong.com".to_string(),
            administrator: true,
        },
    )
}

/// 기본 사용자 계정의 생성 요청
pub fn default_user_seed() -> (Uuid, UserDto) {
    (
        DEFAULT_USER_ID,
        UserDto {
            name: "David Marshal".to_string(),
            phone: "9999999999".to_string(),
            email: "david@marshall.com".to_string(),
            administrator: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids() {
        assert_eq!(
            DEFAULT_ADMINISTRATOR_ID.to_string(),
            "f994c61d-ebd1-463c-a8d8-ebe5989aa501"
        );
        assert_eq!(DEFAULT_USER_ID.to_string(), "1109a8c8-49a3-4921-aa80-65e730d587fe");
    }

    #[test]
    fn test_seeds_pass_dto_validation() {
        use validator::Validate;

        let (_, admin) = default_administrator_seed();
        let (_, user) = default_user_seed();

        assert!(admin.validate().is_ok());
        assert!(admin.is_administrator());
        assert!(user.validate().is_ok());
        assert!(!user.is_administrator());
    }
}
