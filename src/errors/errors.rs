//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 서비스의 도메인 에러(검증, 미존재, 인증 불가, 권한 없음)와
//! 인프라 에러(데이터베이스, 직렬화, 타임아웃)를 하나의 열거형으로 다룹니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 HTTP 상태 코드로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status |
//! |----------|-------------|
//! | `ValidationError` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `UnauthorizedError` | 401 Unauthorized |
//! | `ForbiddenError` | 403 Forbidden |
//! | 나머지 | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn ensure_administrator(user: &User) -> Result<(), AppError> {
//!     if !user.administrator {
//!         return Err(AppError::ForbiddenError("관리자만 사용자를 생성할 수 있습니다".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 도메인 에러 4종은 그대로 호출자에게 전달되고, 인프라 에러는
/// 도메인 분류로 변환되지 않은 채 500으로 노출됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 요청자를 확인할 수 없음 (401 Unauthorized)
    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    /// 요청자는 존재하지만 권한이 없음 (403 Forbidden)
    #[error("Forbidden: {0}")]
    ForbiddenError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 프로필 JSON 직렬화/역직렬화 실패 (500 Internal Server Error)
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// 저장소 호출 시간 초과 (500 Internal Server Error)
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 도메인 에러(검증/미존재/인증/권한)인지 확인합니다.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AppError::ValidationError(_)
                | AppError::NotFound(_)
                | AppError::UnauthorizedError(_)
                | AppError::ForbiddenError(_)
        )
    }

    fn body(&self, path: Option<&str>) -> ErrorResponse {
        let status = actix_web::ResponseError::status_code(self);

        ErrorResponse {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: self.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            path: path.map(str::to_string),
        }
    }

    /// 요청 경로를 포함한 에러 응답을 만듭니다.
    ///
    /// 이미 `error_response`가 한 번 호출된 뒤에 쓰이므로 로그를 다시 남기지 않습니다.
    pub fn response_with_path(&self, path: &str) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(actix_web::ResponseError::status_code(self)).json(self.body(Some(path)))
    }
}

/// 에러 응답 본문
///
/// ```json
/// {
///   "status": 403,
///   "error": "Forbidden",
///   "message": "Forbidden: User can only update own profile details.",
///   "timestamp": "2024-01-01T12:00:00Z",
///   "path": "/v1/f994c61d-ebd1-463c-a8d8-ebe5989aa501/user/7ca4a3b0-1b8e-4a1c-9d55-1d1d0a3f8c11"
/// }
/// ```
///
/// `path`는 [`crate::middlewares::attach_request_path`]를 거친 응답에만 채워집니다.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthorizedError(_) => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 도메인 에러가 아닌 경우(5xx) 서버 로그에 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if !self.is_domain_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code()).json(self.body(None))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::SerializationError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
