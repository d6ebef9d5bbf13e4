// 接続文字列ビルダー
//
// DatabaseConfig と Dialect から接続文字列を生成する。

use crate::core::config::{DatabaseConfig, Dialect};

/// SQLiteのインメモリデータベースを表すデータベース名
pub const SQLITE_MEMORY: &str = ":memory:";

/// 接続文字列を生成
pub fn build_connection_string(dialect: Dialect, config: &DatabaseConfig) -> String {
    match dialect {
        Dialect::PostgreSQL => {
            let user = config.user.as_deref().unwrap_or("postgres");
            format!(
                "postgresql://{}@{}:{}/{}",
                auth_part(user, config.password.as_deref()),
                config.host,
                config.port,
                config.database
            )
        }
        Dialect::MySQL => {
            let user = config.user.as_deref().unwrap_or("root");
            format!(
                "mysql://{}@{}:{}/{}",
                auth_part(user, config.password.as_deref()),
                config.host,
                config.port,
                config.database
            )
        }
        Dialect::SQLite if config.database == SQLITE_MEMORY => "sqlite::memory:".to_string(),
        Dialect::SQLite => format!("sqlite://{}?mode=rwc", config.database),
    }
}

fn auth_part(user: &str, password: Option<&str>) -> String {
    match password {
        Some(password) if !password.is_empty() => format!("{}:{}", user, password),
        _ => user.to_string(),
    }
}
