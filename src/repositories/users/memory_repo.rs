//! # 메모리 기반 사용자 리포지토리
//!
//! 개발과 테스트를 위한 프로세스 내 저장소입니다.
//! 백킹 저장소는 `Vec<User>` 하나이며, 인스턴스마다 `RwLock` 하나로
//! 생성/수정/삭제(쓰기)를 조회(읽기)와 직렬화합니다.

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{UserRepository, default_administrator_seed, default_user_seed};
use crate::domain::dto::users::request::{UpdateUserDto, UserDto};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

/// 메모리 기반 사용자 리포지토리
///
/// 시드 계정은 인스턴스가 소유하며 프로세스 전역으로 공유되지 않습니다.
///
/// ```rust,ignore
/// let repo = InMemoryUserRepository::new();
/// let created = repo.create(UserDto::new("Mike", "8765436548", "selby@mark.com")?).await?;
/// assert_eq!(repo.get(created.id).await?, created);
/// ```
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    default_administrator: User,
    default_user: User,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        let (admin_id, admin_dto) = default_administrator_seed();
        let (user_id, user_dto) = default_user_seed();

        let default_administrator = User::from_dto(admin_id, admin_dto);
        let default_user = User::from_dto(user_id, user_dto);

        Self {
            users: RwLock::new(vec![default_administrator.clone(), default_user.clone()]),
            default_administrator,
            default_user,
        }
    }

    /// 현재 보관 중인 사용자 수
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, dto: UserDto) -> AppResult<User> {
        let mut users = self.users.write().await;

        let mut id = Uuid::new_v4();
        while users.iter().any(|u| u.id == id) {
            id = Uuid::new_v4();
        }

        let user = User::from_dto(id, dto);
        users.push(user.clone());

        debug!("사용자 생성: {}", id);
        Ok(user)
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: Uuid, dto: UpdateUserDto) -> AppResult<()> {
        let mut users = self.users.write().await;

        let slot = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = slot.with_update(dto);

        debug!("사용자 수정: {}", id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut users = self.users.write().await;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        users.remove(index);

        debug!("사용자 삭제: {}", id);
        Ok(())
    }

    fn default_administrator(&self) -> &User {
        &self.default_administrator
    }

    fn default_user(&self) -> &User {
        &self.default_user
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repositories::users::{DEFAULT_ADMINISTRATOR_ID, DEFAULT_USER_ID};

    fn mike() -> UserDto {
        UserDto::new("Mike Selby", "8765436548", "selby@mark.com").unwrap()
    }

    #[tokio::test]
    async fn test_seeds_present_at_initialization() {
        let repo = InMemoryUserRepository::new();

        assert_eq!(repo.len().await, 2);
        assert_eq!(repo.default_administrator().id, DEFAULT_ADMINISTRATOR_ID);
        assert!(repo.default_administrator().is_administrator());
        assert_eq!(repo.default_user().id, DEFAULT_USER_ID);
        assert!(!repo.default_user().is_administrator());

        assert_eq!(&repo.get(DEFAULT_ADMINISTRATOR_ID).await.unwrap(), repo.default_administrator());
        assert_eq!(&repo.get(DEFAULT_USER_ID).await.unwrap(), repo.default_user());
    }

    #[tokio::test]
    async fn test_seeds_are_owned_per_instance() {
        let first = InMemoryUserRepository::new();
        let second = InMemoryUserRepository::new();

        first.delete(DEFAULT_USER_ID).await.unwrap();

        assert!(first.get(DEFAULT_USER_ID).await.is_err());
        assert!(second.get(DEFAULT_USER_ID).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_assigns_new_id() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(mike()).await.unwrap();

        assert_ne!(created.id, DEFAULT_ADMINISTRATOR_ID);
        assert_ne!(created.id, DEFAULT_USER_ID);
        assert_eq!(created.name, "Mike Selby");
        assert!(!created.is_administrator());
        assert_eq!(repo.get(created.id).await.unwrap(), created);
        assert_eq!(repo.len().await, 3);
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let repo = InMemoryUserRepository::new();

        let result = repo.get(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_administrator() {
        let repo = InMemoryUserRepository::new();
        let dto = UpdateUserDto::new("Abc", "7583929275", "rewr@afsa.com").unwrap();

        repo.update(DEFAULT_ADMINISTRATOR_ID, dto).await.unwrap();

        let updated = repo.get(DEFAULT_ADMINISTRATOR_ID).await.unwrap();
        assert_eq!(updated.id, DEFAULT_ADMINISTRATOR_ID);
        assert!(updated.is_administrator());
        assert_eq!(updated.name, "Abc");
        assert_eq!(updated.phone, "7583929275");
        assert_eq!(updated.email, "rewr@afsa.com");
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let dto = UpdateUserDto::new("Rachel", "9876543214", "abc@def.com").unwrap();

        let result = repo.update(Uuid::new_v4(), dto).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_user() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(mike()).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(matches!(repo.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(repo.delete(created.id).await, Err(AppError::NotFound(_))));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_are_all_kept() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create(mike()).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(repo.len().await, 34);
    }
}
