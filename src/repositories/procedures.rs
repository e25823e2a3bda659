//! # 저장 프로시저 실행기
//!
//! 설정된 저장 프로시저 이름으로 호출 구문을 만들고 실행합니다.
//!
//! ## 호출 규약
//!
//! | 연산 | 구문 | 파라미터 |
//! |------|------|----------|
//! | create | `CALL <create>($1::text, $2::jsonb)` | id, 프로필 JSON |
//! | get | `SELECT id, name, phone, email, administrator FROM <get>($1::text)` | id |
//! | update | `CALL <update>($1::text, $2::jsonb)` | id, 프로필 JSON |
//! | delete | `CALL <delete>($1::text)` | id |
//!
//! ## 인젝션 경계
//!
//! 구문 텍스트에 문자열로 끼워 넣는 값은 프로시저 이름뿐이며, 이름은
//! 실행기 생성 시점과 구문을 만들기 직전에 모두
//! [`validate_stored_procedure_name`]을 통과해야 합니다.
//! ID와 프로필 본문은 항상 바인드 파라미터로 전달되고,
//! 호출자 문자열로 컬럼 목록을 만들지 않습니다.

use std::future::Future;

use log::debug;
use serde::Serialize;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::types::Json;

use crate::config::StoredProcedureConfig;
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::utils::validation::validate_stored_procedure_name;

/// get 프로시저가 반환해야 하는 컬럼
pub const USER_COLUMNS: &str = "id, name, phone, email, administrator";

/// `CALL <procedure>($1::text)`
pub fn call_with_id(procedure: &str) -> AppResult<String> {
    validate_stored_procedure_name(procedure)?;
    Ok(format!("CALL {}($1::text)", procedure))
}

/// `CALL <procedure>($1::text, $2::jsonb)`
pub fn call_with_id_and_body(procedure: &str) -> AppResult<String> {
    validate_stored_procedure_name(procedure)?;
    Ok(format!("CALL {}($1::text, $2::jsonb)", procedure))
}

/// `SELECT <columns> FROM <procedure>($1::text)`
pub fn select_with_id(procedure: &str) -> AppResult<String> {
    validate_stored_procedure_name(procedure)?;
    Ok(format!("SELECT {} FROM {}($1::text)", USER_COLUMNS, procedure))
}

/// 저장 프로시저 실행기
///
/// 호출마다 풀에서 커넥션을 하나 얻으며, 여러 호출을 묶는 트랜잭션은 없습니다.
/// 각 왕복은 `StoredProcedureConfig::call_timeout`으로 제한됩니다.
#[derive(Debug, Clone)]
pub struct StoredProcedureExecutor {
    pool: PgPool,
    config: StoredProcedureConfig,
}

impl StoredProcedureExecutor {
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 프로시저 이름 중 하나라도 형식이 올바르지 않은 경우
    pub fn new(database: &Database, config: StoredProcedureConfig) -> AppResult<Self> {
        for procedure in [&config.create, &config.get, &config.update, &config.delete] {
            validate_stored_procedure_name(procedure)?;
        }

        Ok(Self {
            pool: database.pool().clone(),
            config,
        })
    }

    pub async fn create<T>(&self, id: &str, body: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let statement = call_with_id_and_body(&self.config.create)?;
        self.execute_with_id_and_body(&statement, id, body).await
    }

    /// 첫 번째 행을 `map`으로 변환합니다. 행이 없으면 `None`입니다.
    pub async fn get<T, F>(&self, id: &str, map: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&PgRow) -> AppResult<T> + Send,
    {
        let statement = select_with_id(&self.config.get)?;
        debug!("{} [{}]", statement, id);

        let row = self
            .with_timeout(
                &self.config.get,
                sqlx::query(&statement).bind(id).fetch_optional(&self.pool),
            )
            .await?;

        row.as_ref().map(map).transpose()
    }

    pub async fn update<T>(&self, id: &str, body: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let statement = call_with_id_and_body(&self.config.update)?;
        self.execute_with_id_and_body(&statement, id, body).await
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let statement = call_with_id(&self.config.delete)?;
        debug!("{} [{}]", statement, id);

        self.with_timeout(
            &self.config.delete,
            sqlx::query(&statement).bind(id).execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn execute_with_id_and_body<T>(&self, statement: &str, id: &str, body: &T) -> AppResult<()>
    where
        T: Serialize + Sync,
    {
        let profile = serde_json::to_value(body)?;
        debug!("{} [{}]", statement, id);

        self.with_timeout(
            statement,
            sqlx::query(statement).bind(id).bind(Json(profile)).execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    async fn with_timeout<T, F>(&self, operation: &str, fut: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.config.call_timeout, fut).await {
            Ok(result) => result.map_err(AppError::from),
            Err(_) => Err(AppError::TimeoutError(format!(
                "{} 호출이 {:?} 안에 끝나지 않았습니다",
                operation, self.config.call_timeout
            ))),
        }
    }
}
