// checkコマンドハンドラー
//
// 設定ファイルの環境に接続し、優先度カラムの往復と不正値の拒否を確認します。

use crate::cli::command_context::CommandContext;
use crate::cli::OutputFormat;
use crate::services::priority_check::{
    InvalidValueOutcome, PriorityCheckReport, PriorityCheckService,
};
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

/// checkコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct CheckCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// 環境名
    pub env: String,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// checkコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct CheckCommandHandler {
    service: PriorityCheckService,
}

impl CheckCommandHandler {
    /// 新しいCheckCommandHandlerを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// checkコマンドを実行
    ///
    /// 検証に失敗した場合はレポート全体をエラーとして返します。
    pub async fn execute(&self, command: &CheckCommand) -> Result<String> {
        let context =
            CommandContext::load(command.project_path.clone(), command.config_path.clone())?;
        let type_name = context.resolve_type_name(None);
        debug!(env = %command.env, type_name = %type_name, "Executing check command");

        let (dialect, pool) = context.connect(&command.env).await?;
        let result = self.service.run(&pool, dialect, &type_name).await;
        pool.close().await;
        let report = result?;

        let output = match command.format {
            OutputFormat::Text => self.format_text(&command.env, &report),
            OutputFormat::Json => serde_json::to_string_pretty(&report)
                .context("Failed to serialize check report")?,
        };

        if report.is_success() {
            Ok(output)
        } else {
            Err(anyhow!("Priority column check failed\n{}", output))
        }
    }

    /// レポートをテキスト形式にフォーマット
    pub fn format_text(&self, env: &str, report: &PriorityCheckReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!(
                "Priority column check ({}, {})",
                env, report.plan.platform
            )
            .bold()
        ));
        output.push_str(&format!(
            "Column type: {}\n\n",
            report.plan.column_declaration
        ));

        for round_trip in &report.round_trips {
            let read_back = round_trip
                .read_back
                .map_or("-".to_string(), |tag| tag.to_string());
            if round_trip.is_ok() {
                output.push_str(&format!(
                    "{} {} -> {} -> {}\n",
                    "✓".green(),
                    round_trip.tag,
                    round_trip.stored_label,
                    read_back
                ));
            } else {
                output.push_str(&format!(
                    "{} {} -> {} -> {}\n",
                    "✗".red(),
                    round_trip.tag,
                    round_trip.stored_label,
                    read_back
                ));
            }
        }

        output.push('\n');
        match &report.invalid_value {
            InvalidValueOutcome::RejectedByStorage(message) => output.push_str(&format!(
                "{} Invalid value rejected by database: {}",
                "✓".green(),
                message
            )),
            InvalidValueOutcome::RejectedOnRead(message) => output.push_str(&format!(
                "{} Invalid value rejected on read: {}",
                "✓".green(),
                message
            )),
            InvalidValueOutcome::Accepted => output.push_str(&format!(
                "{} Invalid value was accepted",
                "✗".red()
            )),
        }

        output
    }
}
