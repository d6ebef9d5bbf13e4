// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::adapters::database::DatabaseConnectionService;
use crate::adapters::enum_type::TaskPriorityEnumType;
use crate::core::config::{Config, Dialect};
use crate::services::config_loader::ConfigLoader;
use anyhow::{anyhow, Context, Result};
use sqlx::AnyPool;
use std::path::PathBuf;

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Option<Config>,
}

impl CommandContext {
    /// 設定ファイルを読み込んでコンテキストを作成
    ///
    /// 設定ファイルがない場合は `config` を `None` とします。
    /// ただし明示的に指定された設定ファイルがない場合はエラーです。
    pub fn load(project_path: PathBuf, custom_config_path: Option<PathBuf>) -> Result<Self> {
        let explicit = custom_config_path.is_some();
        let config_path = custom_config_path
            .unwrap_or_else(|| project_path.join(Config::DEFAULT_CONFIG_PATH));

        let config = if config_path.exists() {
            Some(
                ConfigLoader::from_file(&config_path)
                    .with_context(|| "Failed to read config file")?,
            )
        } else if explicit {
            return Err(anyhow!("Config file not found: {:?}", config_path));
        } else {
            None
        };

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// 設定ファイルを必須とする
    pub fn require_config(&self) -> Result<&Config> {
        self.config.as_ref().ok_or_else(|| {
            anyhow!(
                "Config file not found: {:?}. Create it with a dialect and at least one environment.",
                self.config_path
            )
        })
    }

    /// 方言を解決（引数 > 設定ファイル > PostgreSQL）
    pub fn resolve_dialect(&self, dialect: Option<&str>) -> Result<Dialect> {
        match dialect {
            Some(name) => name.parse(),
            None => Ok(self
                .config
                .as_ref()
                .map_or(Dialect::PostgreSQL, |config| config.dialect)),
        }
    }

    /// 型名を解決（引数 > 設定ファイル > 既定名）
    pub fn resolve_type_name(&self, type_name: Option<&str>) -> String {
        match (type_name, &self.config) {
            (Some(name), _) => name.to_string(),
            (None, Some(config)) => config.resolve_type_name(TaskPriorityEnumType::NAME).to_string(),
            (None, None) => TaskPriorityEnumType::NAME.to_string(),
        }
    }

    /// 指定環境のデータベースへ接続
    pub async fn connect(&self, env: &str) -> Result<(Dialect, AnyPool)> {
        let config = self.require_config()?;
        let db_config = config.get_database_config(env)?;
        let pool = DatabaseConnectionService::new()
            .create_pool(config.dialect, &db_config)
            .await
            .with_context(|| format!("Failed to connect to environment '{}'", env))?;
        Ok((config.dialect, pool))
    }
}
