// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

use crate::core::domain::EnumDomain;
use crate::core::priority::TaskPriority;

/// 現行アプリケーション名
pub const APP_NAME: &str = "enumtype";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".enumtype.yaml";

/// ログレベルを指定する環境変数
pub const LOG_ENV: &str = "ENUMTYPE_LOG";

/// 既定の環境名
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// 既定のドメイン識別子
pub const DEFAULT_DOMAIN: &str = TaskPriority::NAME;
