// 優先度カラム検証サービス
//
// 実際のデータベースに対して、書き込みフック → 保存 → 読み込みフックの往復と、
// ドメイン外の値の扱いを確認します。作成したテーブルと型は最後に削除します。

use crate::adapters::database::DatabaseConnectionService;
use crate::adapters::enum_type::{EnumColumnType, TaskPriorityEnumType};
use crate::adapters::platform::Platform;
use crate::core::config::Dialect;
use crate::core::domain::EnumDomain;
use crate::core::priority::TaskPriority;
use crate::services::schema_setup::{SchemaSetupPlan, SchemaSetupService};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use sqlx::{AnyPool, Row};
use tracing::{debug, info, warn};

/// 検証用テーブル名
pub const CHECK_TABLE: &str = "enumtype_check";

/// 不正値として挿入するラベル
pub const INVALID_LABEL: &str = "valeur_invalide";

/// 1タグ分の往復結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundTripResult {
    /// 書き込んだタグ
    pub tag: TaskPriority,
    /// 保存されたラベル
    pub stored_label: String,
    /// 読み戻したタグ
    pub read_back: Option<TaskPriority>,
}

impl RoundTripResult {
    /// 書き込んだタグと読み戻したタグが一致したか
    pub fn is_ok(&self) -> bool {
        self.read_back == Some(self.tag)
    }
}

/// 不正値の扱い
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "message", rename_all = "snake_case")]
pub enum InvalidValueOutcome {
    /// 保存時にデータベースが拒否した（ネイティブ列挙型）
    RejectedByStorage(String),
    /// 保存はされたが読み込みフックが拒否した
    RejectedOnRead(String),
    /// どこでも拒否されなかった
    Accepted,
}

impl InvalidValueOutcome {
    /// 不正値が拒否されたか
    pub fn is_rejected(&self) -> bool {
        !matches!(self, InvalidValueOutcome::Accepted)
    }
}

/// 検証レポート
#[derive(Debug, Clone, Serialize)]
pub struct PriorityCheckReport {
    /// 使用したセットアップ計画
    pub plan: SchemaSetupPlan,
    /// タグごとの往復結果
    pub round_trips: Vec<RoundTripResult>,
    /// 不正値の扱い
    pub invalid_value: InvalidValueOutcome,
}

impl PriorityCheckReport {
    /// すべての検証に成功したか
    pub fn is_success(&self) -> bool {
        self.round_trips.iter().all(RoundTripResult::is_ok) && self.invalid_value.is_rejected()
    }
}

/// 優先度カラム検証サービス
#[derive(Debug, Clone, Default)]
pub struct PriorityCheckService {
    database: DatabaseConnectionService,
    setup: SchemaSetupService,
    column: TaskPriorityEnumType,
}

impl PriorityCheckService {
    /// 新しいPriorityCheckServiceを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 検証を実行
    ///
    /// 型や表の作成を含め途中で失敗した場合も、作成したテーブルと型の削除を試みます。
    pub async fn run(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        type_name: &str,
    ) -> Result<PriorityCheckReport> {
        let plan = self
            .setup
            .plan(TaskPriority::NAME, type_name, &dialect)
            .context("Failed to plan enum type setup")?;
        self.run_plan(pool, dialect, plan).await
    }

    /// 作成済みのセットアップ計画で検証を実行
    pub async fn run_plan(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        plan: SchemaSetupPlan,
    ) -> Result<PriorityCheckReport> {
        self.drop_objects(pool, &plan).await?;

        let result = self.setup_and_exercise(pool, dialect, &plan).await;

        if let Err(e) = self.drop_objects(pool, &plan).await {
            warn!(error = %e, "Failed to clean up check objects");
        }

        let (round_trips, invalid_value) = result?;
        Ok(PriorityCheckReport {
            plan,
            round_trips,
            invalid_value,
        })
    }

    async fn setup_and_exercise(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        plan: &SchemaSetupPlan,
    ) -> Result<(Vec<RoundTripResult>, InvalidValueOutcome)> {
        for statement in &plan.up {
            self.database.execute(pool, statement).await?;
        }
        self.database
            .execute(pool, &self.create_table_sql(plan))
            .await?;

        self.exercise(pool, dialect, plan).await
    }

    async fn exercise(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        plan: &SchemaSetupPlan,
    ) -> Result<(Vec<RoundTripResult>, InvalidValueOutcome)> {
        let insert_sql = self.insert_sql(dialect, plan);
        let created_at = Utc::now().to_rfc3339();

        for tag in TaskPriority::VARIANTS {
            let label = self.column.to_storage(*tag);
            self.database
                .execute_with_params(pool, &insert_sql, &[tag.name(), created_at.as_str(), label])
                .await
                .with_context(|| format!("Failed to insert priority {}", tag))?;
            info!(tag = %tag, label = %label, "Stored priority");
        }

        let mut round_trips = Vec::new();
        for tag in TaskPriority::VARIANTS {
            let stored = self.fetch_label(pool, dialect, plan, tag.name()).await?;
            let read_back = self
                .column
                .convert_to_rust_value(stored.as_deref())
                .with_context(|| format!("Failed to read back priority {}", tag))?;
            debug!(tag = %tag, stored = ?stored, "Read back priority");
            round_trips.push(RoundTripResult {
                tag: *tag,
                stored_label: stored.unwrap_or_default(),
                read_back,
            });
        }

        let invalid_value = self.insert_invalid(pool, dialect, plan, &insert_sql).await?;
        Ok((round_trips, invalid_value))
    }

    async fn insert_invalid(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        plan: &SchemaSetupPlan,
        insert_sql: &str,
    ) -> Result<InvalidValueOutcome> {
        let created_at = Utc::now().to_rfc3339();
        let name = "INVALID";

        if let Err(e) = self
            .database
            .execute_with_params(pool, insert_sql, &[name, created_at.as_str(), INVALID_LABEL])
            .await
        {
            info!(error = %e, "Storage rejected invalid value");
            return Ok(InvalidValueOutcome::RejectedByStorage(e.to_string()));
        }

        let stored = self.fetch_label(pool, dialect, plan, name).await?;
        match self.column.convert_to_rust_value(stored.as_deref()) {
            Err(e) => Ok(InvalidValueOutcome::RejectedOnRead(e.to_string())),
            Ok(_) => {
                warn!(value = INVALID_LABEL, "Invalid value was accepted");
                Ok(InvalidValueOutcome::Accepted)
            }
        }
    }

    async fn fetch_label(
        &self,
        pool: &AnyPool,
        dialect: Dialect,
        plan: &SchemaSetupPlan,
        name: &str,
    ) -> Result<Option<String>> {
        let sql = format!(
            "SELECT {} AS priority FROM {} WHERE name = '{}'",
            self.read_expression(dialect),
            CHECK_TABLE,
            name.replace('\'', "''")
        );
        let rows = self.database.fetch_all(pool, &sql).await?;
        let row = rows
            .first()
            .with_context(|| format!("Row '{}' not found in {}", name, CHECK_TABLE))?;
        row.try_get::<Option<String>, _>("priority")
            .with_context(|| format!("Failed to decode priority column for type {}", plan.type_name))
    }

    async fn drop_objects(&self, pool: &AnyPool, plan: &SchemaSetupPlan) -> Result<()> {
        self.database
            .execute(pool, &format!("DROP TABLE IF EXISTS {}", CHECK_TABLE))
            .await?;
        for statement in &plan.down {
            self.database.execute(pool, statement).await?;
        }
        Ok(())
    }

    /// 検証用テーブルのCREATE TABLE文
    pub fn create_table_sql(&self, plan: &SchemaSetupPlan) -> String {
        format!(
            "CREATE TABLE {} (name VARCHAR(64) NOT NULL PRIMARY KEY, created_at VARCHAR(64) NOT NULL, priority {})",
            CHECK_TABLE, plan.column_declaration
        )
    }

    /// 検証用テーブルへのINSERT文
    ///
    /// ネイティブ列挙型のカラムには文字列パラメータを型名へキャストして渡します。
    pub fn insert_sql(&self, dialect: Dialect, plan: &SchemaSetupPlan) -> String {
        let value = if dialect.capabilities().native_enum {
            format!("CAST({} AS {})", placeholder(dialect, 3), plan.column_declaration)
        } else {
            placeholder(dialect, 3)
        };
        format!(
            "INSERT INTO {} (name, created_at, priority) VALUES ({}, {}, {})",
            CHECK_TABLE,
            placeholder(dialect, 1),
            placeholder(dialect, 2),
            value
        )
    }

    /// 優先度カラムを文字列として読む式
    fn read_expression(&self, dialect: Dialect) -> &'static str {
        if dialect.capabilities().native_enum {
            "CAST(priority AS TEXT)"
        } else {
            "priority"
        }
    }
}

/// パラメータのプレースホルダー
fn placeholder(dialect: Dialect, index: usize) -> String {
    match dialect {
        Dialect::PostgreSQL => format!("${}", index),
        Dialect::MySQL | Dialect::SQLite => "?".to_string(),
    }
}
