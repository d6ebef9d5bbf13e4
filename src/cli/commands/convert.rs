// convertコマンドハンドラー
//
// 書き込み時・読み込み時の変換フックを単体で実行します。

use crate::adapters::enum_type::{EnumColumnType, TaskPriorityEnumType};
use crate::cli::{ConvertDirection, OutputFormat};
use crate::core::priority::TaskPriority;
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::debug;

/// convertコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct ConvertCommand {
    /// 変換方向
    pub direction: ConvertDirection,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// 変換結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOutput {
    /// タグ名
    pub name: &'static str,
    /// 保存ラベル
    pub label: &'static str,
}

/// convertコマンドハンドラー
#[derive(Debug, Clone, Default)]
pub struct ConvertCommandHandler {
    column: TaskPriorityEnumType,
}

impl ConvertCommandHandler {
    /// 新しいConvertCommandHandlerを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// convertコマンドを実行
    pub fn execute(&self, command: &ConvertCommand) -> Result<String> {
        let output = match &command.direction {
            ConvertDirection::ToStorage { tag } => {
                let tag: TaskPriority = tag.parse().map_err(|e: String| anyhow!(e))?;
                self.output_for(tag)
            }
            ConvertDirection::FromStorage { label } => {
                let tag = self
                    .column
                    .from_storage(label)
                    .with_context(|| format!("Failed to convert stored value '{}'", label))?;
                self.output_for(tag)
            }
        };
        debug!(tag = %output.name, label = %output.label, "Converted priority");

        match command.format {
            OutputFormat::Text => Ok(match command.direction {
                ConvertDirection::ToStorage { .. } => output.label.to_string(),
                ConvertDirection::FromStorage { .. } => output.name.to_string(),
            }),
            OutputFormat::Json => serde_json::to_string_pretty(&output)
                .context("Failed to serialize conversion result"),
        }
    }

    fn output_for(&self, tag: TaskPriority) -> ConvertOutput {
        ConvertOutput {
            name: tag.name(),
            label: self.column.to_storage(tag),
        }
    }
}
