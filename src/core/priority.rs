// タスク優先度ドメイン
//
// 4つの優先度タグと保存ラベルの対応表。

use crate::core::domain::EnumDomain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// タスク優先度
///
/// シリアライズ時は保存ラベル（"basse" など）を使用します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "basse")]
    Low,
    #[serde(rename = "normale")]
    Medium,
    #[serde(rename = "haute")]
    High,
    #[serde(rename = "critique")]
    Critical,
}

impl TaskPriority {
    /// タグ名（LOW, MEDIUM, HIGH, CRITICAL）
    pub fn name(self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Critical => "CRITICAL",
        }
    }
}

impl EnumDomain for TaskPriority {
    const NAME: &'static str = "task_priority";

    const VARIANTS: &'static [Self] = &[
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Critical,
    ];

    fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "basse",
            TaskPriority::Medium => "normale",
            TaskPriority::High => "haute",
            TaskPriority::Critical => "critique",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// タグ名からの変換（大文字小文字は区別しない）
///
/// CLIの引数解析用。保存ラベルからの変換には `EnumDomain::from_label` を使用します。
impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown priority '{}'. Expected one of: LOW, MEDIUM, HIGH, CRITICAL",
                    s
                )
            })
    }
}
