// ddlコマンドハンドラー
//
// 列挙型のCREATE TYPE / DROP TYPE文とカラム宣言を出力します。

use crate::adapters::enum_type::TaskPriorityEnumType;
use crate::cli::command_context::CommandContext;
use crate::cli::OutputFormat;
use crate::services::schema_setup::{SchemaSetupPlan, SchemaSetupService};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

/// ddlコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct DdlCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 方言（指定されない場合は設定ファイルから取得）
    pub dialect: Option<String>,
    /// ドメイン識別子
    pub domain: String,
    /// 型名（指定されない場合は設定ファイルまたは既定名）
    pub type_name: Option<String>,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// ddlコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct DdlCommandHandler {}

impl DdlCommandHandler {
    /// 新しいDdlCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// ddlコマンドを実行
    pub fn execute(&self, command: &DdlCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let dialect = context.resolve_dialect(command.dialect.as_deref())?;
        let type_name = context.resolve_type_name(command.type_name.as_deref());
        debug!(dialect = %dialect, type_name = %type_name, domain = %command.domain, "Generating DDL");

        let binding_type_mismatch = type_name != TaskPriorityEnumType::NAME;
        if binding_type_mismatch {
            warn!(
                type_name = %type_name,
                binding_type = TaskPriorityEnumType::NAME,
                "Type name differs from the sqlx binding type"
            );
        }

        let plan = SchemaSetupService::new()
            .plan(&command.domain, &type_name, &dialect)
            .with_context(|| format!("Failed to generate DDL for domain '{}'", command.domain))?;

        match command.format {
            OutputFormat::Text => Ok(self.format_text(&plan, binding_type_mismatch)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&plan).context("Failed to serialize DDL plan")
            }
        }
    }

    fn format_text(&self, plan: &SchemaSetupPlan, binding_type_mismatch: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "-- enum domain: {} ({})\n",
            plan.domain, plan.platform
        ));

        if binding_type_mismatch {
            output.push_str(&format!(
                "-- note: sqlx binding of TaskPriority expects type {}\n",
                TaskPriorityEnumType::NAME
            ));
        }

        if plan.up.is_empty() {
            output.push_str("-- native enum types are not supported; no type to create\n");
        } else {
            output.push_str("\n-- up\n");
            for statement in &plan.up {
                output.push_str(&format!("{};\n", statement));
            }
            output.push_str("\n-- down\n");
            for statement in &plan.down {
                output.push_str(&format!("{};\n", statement));
            }
        }

        output.push_str(&format!("\n-- column declaration\n{}", plan.column_declaration));
        output
    }
}
