//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 설정에 따라 메모리 또는 PostgreSQL 저장 프로시저 저장소를 골라
//! `UserService`에 주입합니다.

use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_service_backend::config::{
    DatabaseConfig, Environment, RepositoryBackend, RepositoryConfig, ServerConfig,
    StoredProcedureConfig,
};
use user_service_backend::db::Database;
use user_service_backend::errors::AppResult;
use user_service_backend::repositories::users::{
    InMemoryUserRepository, PostgresUserRepository, UserRepository,
};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(msg) => info!("{}", msg),
        Err(msg) => warn!("{}", msg),
    }

    info!("🚀 사용자 서비스 시작중... ({:?})", Environment::current());

    let user_repo = match initialize_repository().await {
        Ok(repo) => repo,
        Err(e) => {
            error!("저장소 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!(
        "✅ 저장소 준비 완료 (기본 관리자: {}, 기본 사용자: {})",
        user_repo.default_administrator().id,
        user_repo.default_user().id
    );

    let user_service = web::Data::new(UserService::new(user_repo));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 설정된 백엔드로 사용자 저장소를 만듭니다
///
/// * `REPOSITORY_BACKEND=memory` - 프로세스 메모리
/// * `REPOSITORY_BACKEND=postgres` - `DATABASE_URL`에 연결 후 시드 계정 보장
///   (`DATABASE_RUN_MIGRATIONS=true`이면 번들된 프로시저를 먼저 설치)
async fn initialize_repository() -> AppResult<Arc<dyn UserRepository>> {
    match RepositoryConfig::backend() {
        RepositoryBackend::Memory => {
            info!("💾 메모리 저장소 사용");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        RepositoryBackend::Postgres => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new().await?;
            if DatabaseConfig::run_migrations() {
                database.migrate().await?;
            }
            let repo = PostgresUserRepository::new(&database, StoredProcedureConfig::from_env()).await?;
            Ok(Arc::new(repo))
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 돌려주고, 기록은 호출자가 합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return Ok(format!("Current profile: {}, 기본 .env 파일 로드", profile));
        }
    };

    dotenv::from_filename(filename)
        .map(|_| format!("Current profile: {}, {} 파일 로드 됨", profile, filename))
        .map_err(|e| format!("Current profile: {}, {} 파일 로드 실패: {}", profile, filename, e))
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=user_service_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
