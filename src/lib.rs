//! 사용자 관리 서비스 백엔드
//!
//! 요청자 기준 권한 정책을 갖춘 사용자 CRUD 서비스입니다.
//! 저장소는 프로세스 메모리 또는 PostgreSQL 저장 프로시저 중 하나를 시작 시점에 선택합니다.
//!
//! # Features
//!
//! - **권한 정책**: 관리자만 생성, 관리자는 전체 조회, 수정/삭제는 본인만
//! - **입력 검증**: 10자리 전화번호, 이메일 형식, 필수 이름
//! - **저장 프로시저**: 설정 가능한 프로시저 이름과 인젝션 방지 검증
//! - **시드 계정**: 기본 관리자와 기본 사용자
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   UserService   │ ← 권한 정책
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ UserRepository  │ ← 메모리 / 저장 프로시저
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   PostgreSQL    │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::{InMemoryUserRepository, UserRepository};
//! use user_service_backend::services::users::UserService;
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let admin = repo.default_administrator().id;
//! let service = UserService::new(repo);
//!
//! let user = service.create_user(Some(admin), Some(dto)).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
