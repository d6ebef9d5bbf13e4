// エラー型定義
//
// 列挙型カラムの変換・DDL生成・データベース操作で発生するエラー型を提供します。
// thiserrorを使用して、EnumTypeError と DatabaseError を定義します。

use thiserror::Error;

/// 列挙型エラー
///
/// ドメイン値の変換およびDDL生成時に発生するエラーを表現します。
/// いずれも一時的な障害ではないため、再試行せずに即座に呼び出し元へ返します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumTypeError {
    /// Stored label does not belong to the domain
    #[error("Invalid value '{value}' for enum domain '{domain}'")]
    InvalidDomainValue {
        /// 読み込まれた生の値
        value: String,
        /// ドメイン名
        domain: String,
    },

    /// Domain declares no values
    #[error("Enum domain '{domain}' has no values")]
    DomainEmpty {
        /// ドメイン名
        domain: String,
    },

    /// Two tags share the same stored label
    #[error("Enum domain '{domain}' repeats label '{label}'")]
    DuplicateLabel {
        /// ドメイン名
        domain: String,
        /// 重複したラベル
        label: String,
    },

    /// Domain identifier is not registered
    #[error("Unknown enum domain '{domain}'")]
    UnknownDomain {
        /// ドメイン名
        domain: String,
    },
}

impl EnumTypeError {
    /// 不正なドメイン値エラーを作成
    pub fn invalid_value(value: impl Into<String>, domain: impl Into<String>) -> Self {
        EnumTypeError::InvalidDomainValue {
            value: value.into(),
            domain: domain.into(),
        }
    }

    /// 不正なドメイン値エラーかどうか
    pub fn is_invalid_domain_value(&self) -> bool {
        matches!(self, EnumTypeError::InvalidDomainValue { .. })
    }

    /// 空ドメインエラーかどうか
    pub fn is_domain_empty(&self) -> bool {
        matches!(self, EnumTypeError::DomainEmpty { .. })
    }

    /// ラベル重複エラーかどうか
    pub fn is_duplicate_label(&self) -> bool {
        matches!(self, EnumTypeError::DuplicateLabel { .. })
    }

    /// 未登録ドメインエラーかどうか
    pub fn is_unknown_domain(&self) -> bool {
        matches!(self, EnumTypeError::UnknownDomain { .. })
    }

    /// エラーに関係するドメイン名を取得
    pub fn domain(&self) -> &str {
        match self {
            EnumTypeError::InvalidDomainValue { domain, .. }
            | EnumTypeError::DomainEmpty { domain }
            | EnumTypeError::DuplicateLabel { domain, .. }
            | EnumTypeError::UnknownDomain { domain } => domain,
        }
    }
}

/// データベースエラー
///
/// 診断用ハーネスがデータベースを操作する際に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection error
    #[error("Database connection error: {message} (cause: {cause})")]
    Connection {
        /// エラーメッセージ
        message: String,
        /// エラー原因
        cause: String,
    },

    /// Query execution error
    #[error("Query execution error: {message}")]
    Query {
        /// エラーメッセージ
        message: String,
        /// 失敗したSQL
        sql: Option<String>,
    },
}

impl DatabaseError {
    /// 接続エラーかどうか
    pub fn is_connection(&self) -> bool {
        matches!(self, DatabaseError::Connection { .. })
    }

    /// クエリエラーかどうか
    pub fn is_query(&self) -> bool {
        matches!(self, DatabaseError::Query { .. })
    }

    /// 失敗したSQL文を取得
    pub fn sql(&self) -> Option<&str> {
        match self {
            DatabaseError::Query { sql, .. } => sql.as_deref(),
            DatabaseError::Connection { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_domain_value_message() {
        let error = EnumTypeError::invalid_value("valeur_invalide", "task_priority");

        assert!(error.is_invalid_domain_value());
        assert!(!error.is_domain_empty());
        assert_eq!(error.domain(), "task_priority");
        assert_eq!(
            error.to_string(),
            "Invalid value 'valeur_invalide' for enum domain 'task_priority'"
        );
    }

    #[test]
    fn test_ddl_error_variants() {
        let empty = EnumTypeError::DomainEmpty {
            domain: "nothing".to_string(),
        };
        assert!(empty.is_domain_empty());
        assert!(empty.to_string().contains("no values"));

        let unknown = EnumTypeError::UnknownDomain {
            domain: "missing".to_string(),
        };
        assert!(unknown.is_unknown_domain());
        assert_eq!(unknown.domain(), "missing");
    }

    #[test]
    fn test_database_error_variants() {
        let conn_error = DatabaseError::Connection {
            message: "Connection failed".to_string(),
            cause: "Timeout".to_string(),
        };
        assert!(conn_error.is_connection());
        assert!(conn_error.sql().is_none());

        let query_error = DatabaseError::Query {
            message: "Query failed".to_string(),
            sql: Some("DROP TYPE IF EXISTS task_priority_enum".to_string()),
        };
        assert!(query_error.is_query());
        assert_eq!(
            query_error.sql(),
            Some("DROP TYPE IF EXISTS task_priority_enum")
        );
    }
}
