// バックエンドプラットフォーム
//
// 列挙型カラムの宣言方法を決めるための、データベースごとの機能フラグ。
// 分岐は方言名ではなく機能フラグで行います。

use crate::core::config::Dialect;
use serde::Serialize;

/// 文字列カラムの既定長
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// バックエンドの機能
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackendCapabilities {
    /// 名前付きのネイティブ列挙型をカラム型として使用できるか
    pub native_enum: bool,
    /// フォールバック時の文字列カラム長
    pub string_length: u32,
}

impl BackendCapabilities {
    /// ネイティブ列挙型をサポートするバックエンド
    pub fn native_enum() -> Self {
        Self {
            native_enum: true,
            string_length: DEFAULT_STRING_LENGTH,
        }
    }

    /// 文字列カラムにフォールバックするバックエンド
    pub fn text_only() -> Self {
        Self {
            native_enum: false,
            string_length: DEFAULT_STRING_LENGTH,
        }
    }

    /// 文字列カラム長を変更
    pub fn with_string_length(mut self, length: u32) -> Self {
        self.string_length = length;
        self
    }

    /// フォールバック用の文字列カラム宣言
    pub fn string_type_declaration(&self) -> String {
        format!("VARCHAR({})", self.string_length)
    }
}

/// データベースプラットフォーム
///
/// 新しいバックエンドは機能を宣言するだけで追加できます。
pub trait Platform {
    /// プラットフォーム名
    fn name(&self) -> &str;

    /// バックエンドの機能
    fn capabilities(&self) -> BackendCapabilities;
}

impl Platform for Dialect {
    fn name(&self) -> &str {
        match self {
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
            Dialect::SQLite => "sqlite",
        }
    }

    fn capabilities(&self) -> BackendCapabilities {
        match self {
            Dialect::PostgreSQL => BackendCapabilities::native_enum(),
            // MySQLのENUMはカラム単位のインライン定義で、名前付きの型を持たない
            Dialect::MySQL => BackendCapabilities::text_only(),
            Dialect::SQLite => BackendCapabilities::text_only(),
        }
    }
}

impl Platform for BackendCapabilities {
    fn name(&self) -> &str {
        "custom"
    }

    fn capabilities(&self) -> BackendCapabilities {
        *self
    }
}
