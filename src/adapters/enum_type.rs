// 列挙型カラムアダプター
//
// 列挙ドメインとデータベースの型名を結び付け、書き込み時・読み込み時の
// 値変換フックとDDL生成をまとめて提供します。

use crate::adapters::platform::Platform;
use crate::adapters::sql_generator::EnumTypeSqlGenerator;
use crate::core::domain::{DomainDefinition, EnumDomain};
use crate::core::error::EnumTypeError;
use crate::core::priority::TaskPriority;
use tracing::warn;

/// 列挙型カラム
///
/// 実装側は対象ドメインとデータベース上の型名だけを宣言します。
pub trait EnumColumnType {
    /// 対象の列挙ドメイン
    type Domain: EnumDomain;

    /// データベース上の型名
    const TYPE_NAME: &'static str;

    /// 型名を取得
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    /// カラム宣言を取得
    fn sql_declaration(&self, platform: &dyn Platform) -> String {
        EnumTypeSqlGenerator::new().generate_column_declaration(Self::TYPE_NAME, platform)
    }

    /// スキーマのイントロスペクションでこの型に戻せるよう、カラムに型ヒントを付けるか
    fn requires_sql_comment_hint(&self) -> bool {
        true
    }

    /// タグを保存ラベルに変換
    fn to_storage(&self, tag: Self::Domain) -> &'static str {
        tag.label()
    }

    /// 保存ラベルをタグに変換
    ///
    /// ドメインにないラベル（空文字列や大文字小文字違いを含む）は
    /// `InvalidDomainValue` になります。
    fn from_storage(&self, label: &str) -> Result<Self::Domain, EnumTypeError> {
        Self::Domain::from_label(label).inspect_err(|_| {
            warn!(
                domain = Self::Domain::NAME,
                type_name = Self::TYPE_NAME,
                value = %label,
                "Rejected stored value outside enum domain"
            );
        })
    }

    /// 書き込み時の変換フック
    ///
    /// 失敗しません。`None` は `None` のまま返します。
    fn convert_to_database_value(&self, value: Option<Self::Domain>) -> Option<&'static str> {
        value.map(|tag| self.to_storage(tag))
    }

    /// 読み込み時の変換フック
    ///
    /// `None` は `None` のまま返します。ドメインにないラベルを
    /// `None` に読み替えることはしません。
    fn convert_to_rust_value(
        &self,
        value: Option<&str>,
    ) -> Result<Option<Self::Domain>, EnumTypeError> {
        value.map(|label| self.from_storage(label)).transpose()
    }

    /// 列挙型を作成するSQLを生成
    fn create_type_sql(&self) -> Result<String, EnumTypeError> {
        EnumTypeSqlGenerator::new()
            .generate_create_type(Self::TYPE_NAME, &DomainDefinition::of::<Self::Domain>())
    }

    /// 列挙型を削除するSQLを生成
    fn drop_type_sql(&self) -> String {
        EnumTypeSqlGenerator::new().generate_drop_type(Self::TYPE_NAME)
    }
}

/// タスク優先度カラム型
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskPriorityEnumType;

impl TaskPriorityEnumType {
    /// 既定の型名
    pub const NAME: &'static str = "task_priority_enum";
}

impl EnumColumnType for TaskPriorityEnumType {
    type Domain = TaskPriority;

    const TYPE_NAME: &'static str = TaskPriorityEnumType::NAME;
}
