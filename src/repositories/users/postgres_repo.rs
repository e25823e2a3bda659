//! # PostgreSQL 사용자 리포지토리
//!
//! 모든 연산을 설정된 저장 프로시저 호출로 위임합니다.
//! 호출 구문과 인젝션 경계는 [`StoredProcedureExecutor`]가 담당합니다.
//!
//! ## 행 매핑
//!
//! get 프로시저는 `id, name, phone, email, administrator` 컬럼을 반환해야 합니다.
//! `id`는 `uuid` 또는 `text` 컬럼 모두 허용합니다.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use super::{UserRepository, default_administrator_seed, default_user_seed};
use crate::config::StoredProcedureConfig;
use crate::db::Database;
use crate::domain::dto::users::request::{UpdateUserDto, UserDto};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::procedures::StoredProcedureExecutor;

/// PostgreSQL 저장 프로시저 기반 사용자 리포지토리
///
/// 여러 호출을 하나의 트랜잭션으로 묶지 않습니다. 존재 확인 후 수정/삭제
/// 사이에 다른 요청이 끼어들 수 있으며, 이 경우의 결과는 프로시저 동작을 따릅니다.
#[derive(Debug)]
pub struct PostgresUserRepository {
    executor: StoredProcedureExecutor,
    default_administrator: User,
    default_user: User,
}

impl PostgresUserRepository {
    /// 프로시저 이름을 검증하고 두 시드 계정이 존재하도록 보장합니다.
    ///
    /// 시드 계정이 이미 있으면 저장된 값을 그대로 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 프로시저 이름이 올바르지 않은 경우
    /// * `AppError::DatabaseError` / `AppError::TimeoutError` - 시딩 중 저장소 오류
    pub async fn new(database: &Database, config: StoredProcedureConfig) -> AppResult<Self> {
        let executor = StoredProcedureExecutor::new(database, config)?;

        let (admin_id, admin_dto) = default_administrator_seed();
        let (user_id, user_dto) = default_user_seed();

        let default_administrator = Self::ensure_seed(&executor, admin_id, admin_dto).await?;
        let default_user = Self::ensure_seed(&executor, user_id, user_dto).await?;

        info!("✅ PostgreSQL 사용자 리포지토리 초기화 완료");

        Ok(Self {
            executor,
            default_administrator,
            default_user,
        })
    }

    async fn ensure_seed(executor: &StoredProcedureExecutor, id: Uuid, dto: UserDto) -> AppResult<User> {
        if let Some(existing) = executor.get(&id.to_string(), map_user_row).await? {
            return Ok(existing);
        }

        executor.create(&id.to_string(), &dto).await?;
        info!("시드 계정 생성: {}", id);

        Ok(User::from_dto(id, dto))
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<User>> {
        self.executor.get(&id.to_string(), map_user_row).await
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
    }
}

/// get 프로시저 결과 행을 `User`로 변환합니다.
pub fn map_user_row(row: &PgRow) -> AppResult<User> {
    let id = match row.try_get::<Uuid, _>("id") {
        Ok(id) => id,
        Err(_) => {
            let raw: String = row.try_get("id")?;
            Uuid::parse_str(&raw).with_context(|| format!("잘못된 사용자 ID 컬럼: {}", raw))?
        }
    };

    Ok(User {
        id,
        name: row.try_get("name")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        administrator: row.try_get::<Option<bool>, _>("administrator")?.unwrap_or(false),
    })
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, dto: UserDto) -> AppResult<User> {
        let id = Uuid::new_v4();
        self.executor.create(&id.to_string(), &dto).await?;

        debug!("사용자 생성: {}", id);

        match self.find(id).await? {
            Some(user) => Ok(user),
            None => Err(AppError::DatabaseError(format!(
                "생성한 사용자를 다시 읽을 수 없습니다: {}",
                id
            ))),
        }
    }

    async fn get(&self, id: Uuid) -> AppResult<User> {
        self.find(id).await?.ok_or_else(|| Self::not_found(id))
    }

    async fn update(&self, id: Uuid, dto: UpdateUserDto) -> AppResult<()> {
        if self.find(id).await?.is_none() {
            return Err(Self::not_found(id));
        }

        self.executor.update(&id.to_string(), &dto).await?;
        debug!("사용자 수정: {}", id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.find(id).await?.is_none() {
            return Err(Self::not_found(id));
        }

        self.executor.delete(&id.to_string()).await?;
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
