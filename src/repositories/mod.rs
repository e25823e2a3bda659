//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] trait에만 의존하며,
//! 구현은 시작 시점에 하나를 골라 주입합니다.
//!
//! - [`users::InMemoryUserRepository`] - 프로세스 메모리
//! - [`users::PostgresUserRepository`] - [`procedures::StoredProcedureExecutor`]를 통한 저장 프로시저 호출
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{PostgresUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> =
//!     Arc::new(PostgresUserRepository::new(&database, StoredProcedureConfig::from_env()).await?);
//! let user = repo.get(user_id).await?;
//! ```

pub mod procedures;
pub mod users;
