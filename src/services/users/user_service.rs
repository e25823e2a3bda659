//! # 사용자 관리 서비스 구현
//!
//! 요청자(requester) 기준의 권한 정책을 적용한 뒤 사용자 저장소로 위임합니다.
//! 요청자 신원은 인증되지 않은 값으로 전달되며, 이 서비스는 그 ID가
//! 저장소에 존재하는지와 관리자인지만 판단합니다.
//!
//! ## 권한 정책
//!
//! ```text
//! ┌──────────────┬──────────────────────┬───────────────────────┐
//! │   연산       │   관리자 요청자       │   일반 요청자          │
//! ├──────────────┼──────────────────────┼───────────────────────┤
//! │ create_user  │ 허용                  │ Forbidden             │
//! │ get_user     │ 모든 사용자 조회       │ 본인만                │
//! │ update_user  │ 본인만                │ 본인만                │
//! │ delete_user  │ 본인만                │ 본인만                │
//! └──────────────┴──────────────────────┴───────────────────────┘
//! ```
//!
//! ## 검사 순서
//!
//! 1. 인자 존재 여부 (`ValidationError`)
//! 2. 요청자 조회, 없으면 `UnauthorizedError`
//! 3. 정책 위반이면 `ForbiddenError`
//! 4. 저장소 연산 (`NotFound` 및 인프라 에러는 그대로 전달)
//!
//! 권한 검사가 끝나기 전에는 대상 사용자에 대한 저장소 연산을 하지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use uuid::Uuid;

use crate::{
    domain::{
        dto::users::request::{UpdateUserDto, UserDto},
        entities::users::User,
    },
    errors::{AppError, AppResult},
    repositories::users::UserRepository,
    utils::validation::validate_not_null,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 주입된 저장소 외에는 상태가 없으므로 여러 워커가 하나의 인스턴스를
/// `web::Data`로 공유합니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
/// let service = UserService::new(repo.clone());
///
/// let admin = repo.default_administrator().id;
/// let dto = UserDto::new("Mike Selby", "8765436548", "selby@mark.com")?;
/// let mike = service.create_user(Some(admin), Some(dto)).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// 관리자만 사용자를 만들 수 있으며, ID는 저장소가 부여합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청자 ID 또는 DTO가 없는 경우
    /// * `UnauthorizedError` - 요청자가 존재하지 않는 경우
    /// * `ForbiddenError` - 요청자가 관리자가 아닌 경우
    pub async fn create_user(&self, requester_id: Option<Uuid>, dto: Option<UserDto>) -> AppResult<User> {
        let requester_id = validate_not_null(requester_id, "Requester id")?;
        let dto = validate_not_null(dto, "User details")?;

        let requester = self.get_requester(requester_id).await?;
        if !requester.is_administrator() {
            warn!("관리자가 아닌 요청자의 사용자 생성 시도: {}", requester_id);
            return Err(AppError::ForbiddenError(
                "Requester is not an administrator and cannot request user creation.".to_string(),
            ));
        }

        let created = self.user_repo.create(dto).await?;
        info!("사용자 생성 완료: {} (요청자: {})", created.id, requester_id);

        Ok(created)
    }

    /// 사용자 프로필 조회
    ///
    /// 관리자는 누구든 조회할 수 있고, 일반 사용자는 본인만 조회할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청자 ID 또는 대상 ID가 없는 경우
    /// * `UnauthorizedError` - 요청자가 존재하지 않는 경우
    /// * `ForbiddenError` - 일반 사용자가 다른 사용자를 조회하는 경우
    /// * `NotFound` - 대상 사용자가 없는 경우
    pub async fn get_user(&self, requester_id: Option<Uuid>, user_id: Option<Uuid>) -> AppResult<User> {
        let requester_id = validate_not_null(requester_id, "Requester id")?;
        let user_id = validate_not_null(user_id, "User id")?;

        let requester = self.get_requester(requester_id).await?;
        if !requester.is_administrator() && requester_id != user_id {
            warn!("다른 사용자 조회 거부: {} -> {}", requester_id, user_id);
            return Err(AppError::ForbiddenError(
                "Requester can not request to get the user's profile details.".to_string(),
            ));
        }

        self.user_repo.get(user_id).await
    }

    /// 본인 프로필 수정
    ///
    /// 관리자도 다른 사용자의 프로필은 수정할 수 없습니다.
    /// 관리자 여부는 변경되지 않으며 수정된 사용자를 다시 읽어 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 인자 중 하나라도 없는 경우
    /// * `UnauthorizedError` - 요청자가 존재하지 않는 경우
    /// * `ForbiddenError` - 요청자와 대상이 다른 경우
    pub async fn update_user(
        &self,
        requester_id: Option<Uuid>,
        user_id: Option<Uuid>,
        dto: Option<UpdateUserDto>,
    ) -> AppResult<User> {
        let requester_id = validate_not_null(requester_id, "Requester id")?;
        let user_id = validate_not_null(user_id, "User id")?;
        let dto = validate_not_null(dto, "User details")?;

        self.get_requester(requester_id).await?;
        if requester_id != user_id {
            warn!("다른 사용자 수정 거부: {} -> {}", requester_id, user_id);
            return Err(AppError::ForbiddenError(
                "User can only update own profile details.".to_string(),
            ));
        }

        self.user_repo.update(user_id, dto).await?;
        info!("사용자 수정 완료: {}", user_id);

        self.user_repo.get(user_id).await
    }

    /// 본인 계정 삭제
    ///
    /// # Errors
    ///
    /// * `ValidationError` - 요청자 ID 또는 대상 ID가 없는 경우
    /// * `UnauthorizedError` - 요청자가 존재하지 않는 경우
    /// * `ForbiddenError` - 요청자와 대상이 다른 경우
    pub async fn delete_user(&self, requester_id: Option<Uuid>, user_id: Option<Uuid>) -> AppResult<()> {
        let requester_id = validate_not_null(requester_id, "Requester id")?;
        let user_id = validate_not_null(user_id, "User id")?;

        self.get_requester(requester_id).await?;
        if requester_id != user_id {
            warn!("다른 사용자 삭제 거부: {} -> {}", requester_id, user_id);
            return Err(AppError::ForbiddenError(
                "User can only delete own profile details.".to_string(),
            ));
        }

        self.user_repo.delete(user_id).await?;
        info!("사용자 삭제 완료: {}", user_id);

        Ok(())
    }

    /// 요청자를 조회합니다. 저장소의 `NotFound`만 `UnauthorizedError`로 바꿉니다.
    async fn get_requester(&self, requester_id: Uuid) -> AppResult<User> {
        match self.user_repo.get(requester_id).await {
            Ok(user) => Ok(user),
            Err(AppError::NotFound(_)) => {
                warn!("존재하지 않는 요청자: {}", requester_id);
                Err(AppError::UnauthorizedError("Requester is not present.".to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
