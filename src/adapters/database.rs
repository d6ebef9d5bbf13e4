// データベース接続アダプター
//
// SQLxを使用したデータベース接続の管理を行います。
// PostgreSQL、MySQL、SQLiteに対応した統一されたインターフェースを提供します。

use crate::adapters::connection_string;
use crate::core::config::{DatabaseConfig, Dialect};
use crate::core::error::DatabaseError;
use sqlx::any::AnyRow;
use sqlx::pool::PoolOptions;
use sqlx::{Any, AnyPool};
use std::time::Duration;
use tracing::debug;

/// データベース接続サービス
///
/// データベース接続プールの初期化とSQL実行を行います。
#[derive(Debug, Clone, Default)]
pub struct DatabaseConnectionService {}

impl DatabaseConnectionService {
    /// 新しいDatabaseConnectionServiceを作成
    pub fn new() -> Self {
        Self {}
    }

    /// データベース接続文字列を構築
    pub fn build_connection_string(&self, dialect: Dialect, config: &DatabaseConfig) -> String {
        connection_string::build_connection_string(dialect, config)
    }

    /// データベース接続プールを作成
    ///
    /// # Arguments
    ///
    /// * `dialect` - データベース方言
    /// * `config` - データベース設定
    ///
    /// # Returns
    ///
    /// 接続プールまたはエラー
    pub async fn create_pool(
        &self,
        dialect: Dialect,
        config: &DatabaseConfig,
    ) -> Result<AnyPool, DatabaseError> {
        sqlx::any::install_default_drivers();

        let connection_string = self.build_connection_string(dialect, config);
        debug!(dialect = %dialect, database = %config.database, "Connecting to database");

        self.create_pool_options(config.timeout)
            .connect(&connection_string)
            .await
            .map_err(|e| DatabaseError::Connection {
                message: format!("Failed to create database connection pool: {}", dialect),
                cause: e.to_string(),
            })
    }

    /// プールオプションを作成
    ///
    /// SQLiteのインメモリデータベースは接続ごとに別のデータベースになるため、
    /// 接続数は1に固定します。
    pub fn create_pool_options(&self, timeout_secs: Option<u64>) -> PoolOptions<Any> {
        PoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(timeout_secs.unwrap_or(30)))
    }

    /// SQL文を実行
    ///
    /// # Returns
    ///
    /// 影響を受けた行数
    pub async fn execute(&self, pool: &AnyPool, sql: &str) -> Result<u64, DatabaseError> {
        debug!(sql = %sql, "Executing statement");
        sqlx::query(sql)
            .execute(pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| DatabaseError::Query {
                message: e.to_string(),
                sql: Some(sql.to_string()),
            })
    }

    /// 文字列パラメータ付きでSQL文を実行
    pub async fn execute_with_params(
        &self,
        pool: &AnyPool,
        sql: &str,
        params: &[&str],
    ) -> Result<u64, DatabaseError> {
        debug!(sql = %sql, params = ?params, "Executing statement");
        let mut query = sqlx::query(sql);
        for param in params {
            query = query.bind(param.to_string());
        }
        query
            .execute(pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|e| DatabaseError::Query {
                message: e.to_string(),
                sql: Some(sql.to_string()),
            })
    }

    /// 行を取得
    pub async fn fetch_all(&self, pool: &AnyPool, sql: &str) -> Result<Vec<AnyRow>, DatabaseError> {
        debug!(sql = %sql, "Fetching rows");
        sqlx::query(sql)
            .fetch_all(pool)
            .await
            .map_err(|e| DatabaseError::Query {
                message: e.to_string(),
                sql: Some(sql.to_string()),
            })
    }

    /// 接続プールを閉じる
    pub async fn close_pool(&self, pool: AnyPool) {
        pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            host: String::new(),
            port: 0,
            database: connection_string::SQLITE_MEMORY.to_string(),
            user: None,
            password: None,
            timeout: Some(5),
        }
    }

    #[test]
    fn test_new_service() {
        let service = DatabaseConnectionService::new();
        assert!(format!("{:?}", service).contains("DatabaseConnectionService"));
    }

    #[tokio::test]
    async fn test_execute_and_fetch_on_sqlite_memory() {
        let service = DatabaseConnectionService::new();
        let pool = service
            .create_pool(Dialect::SQLite, &memory_config())
            .await
            .unwrap();

        service
            .execute(&pool, "CREATE TABLE labels (label TEXT NOT NULL)")
            .await
            .unwrap();
        let affected = service
            .execute_with_params(&pool, "INSERT INTO labels (label) VALUES (?)", &["haute"])
            .await
            .unwrap();
        assert_eq!(affected, 1);

        let rows = service.fetch_all(&pool, "SELECT label FROM labels").await.unwrap();
        assert_eq!(rows.len(), 1);
        let label: String = rows[0].try_get("label").unwrap();
        assert_eq!(label, "haute");

        service.close_pool(pool).await;
    }

    #[tokio::test]
    async fn test_execute_reports_failing_sql() {
        let service = DatabaseConnectionService::new();
        let pool = service
            .create_pool(Dialect::SQLite, &memory_config())
            .await
            .unwrap();

        let err = service.execute(&pool, "SELECT * FROM missing").await.unwrap_err();
        assert!(err.is_query());
        assert_eq!(err.sql(), Some("SELECT * FROM missing"));
    }
}
