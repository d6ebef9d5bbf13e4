// SQL生成アダプター
//
// ドメイン定義から列挙型のDDL文（CREATE TYPE / DROP TYPE）と
// カラム宣言を生成します。SQLの実行は行いません。

use crate::adapters::platform::Platform;
use crate::adapters::sql_quote::{format_type_name, quote_string_literals};
use crate::core::domain::{DomainDefinition, DomainRegistry};
use crate::core::error::EnumTypeError;

/// 列挙型SQLジェネレーター
#[derive(Debug, Clone, Default)]
pub struct EnumTypeSqlGenerator {}

impl EnumTypeSqlGenerator {
    /// 新しいEnumTypeSqlGeneratorを作成
    pub fn new() -> Self {
        Self {}
    }

    /// CREATE TYPE文を生成
    ///
    /// # Arguments
    ///
    /// * `type_name` - 作成する列挙型の名前
    /// * `domain` - ドメイン定義（ラベルは定義順に並ぶ）
    ///
    /// # Returns
    ///
    /// CREATE TYPE文のSQL文字列。ドメインが空の場合は `DomainEmpty`、
    /// ラベルが重複している場合は `DuplicateLabel`
    pub fn generate_create_type(
        &self,
        type_name: &str,
        domain: &DomainDefinition,
    ) -> Result<String, EnumTypeError> {
        domain.validate()?;

        Ok(format!(
            "CREATE TYPE {} AS ENUM ({})",
            format_type_name(type_name),
            quote_string_literals(domain.labels())
        ))
    }

    /// ドメイン識別子を解決してCREATE TYPE文を生成
    ///
    /// 識別子が登録されていない場合は `UnknownDomain`
    pub fn generate_create_type_for(
        &self,
        registry: &DomainRegistry,
        type_name: &str,
        domain_name: &str,
    ) -> Result<String, EnumTypeError> {
        let domain = registry.resolve(domain_name)?;
        self.generate_create_type(type_name, domain)
    }

    /// DROP TYPE文を生成
    ///
    /// 型が存在しなくてもエラーにならない形式を使用します。
    pub fn generate_drop_type(&self, type_name: &str) -> String {
        format!("DROP TYPE IF EXISTS {}", format_type_name(type_name))
    }

    /// カラム宣言を生成
    ///
    /// ネイティブ列挙型をサポートするバックエンドでは型名をそのまま、
    /// それ以外では長さ制限付きの文字列型を返します。
    pub fn generate_column_declaration(&self, type_name: &str, platform: &dyn Platform) -> String {
        let capabilities = platform.capabilities();
        if capabilities.native_enum {
            format_type_name(type_name)
        } else {
            capabilities.string_type_declaration()
        }
    }
}
