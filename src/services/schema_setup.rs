// スキーマセットアップサービス
//
// マイグレーション時に実行する列挙型のDDL（up / down）とカラム宣言をまとめます。
// SQLの実行は呼び出し側（マイグレーションツール）の責務です。

use crate::adapters::platform::Platform;
use crate::adapters::sql_generator::EnumTypeSqlGenerator;
use crate::core::domain::DomainRegistry;
use crate::core::error::EnumTypeError;
use serde::Serialize;
use tracing::debug;

/// 列挙型のセットアップ計画
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSetupPlan {
    /// ドメイン名
    pub domain: String,
    /// 列挙型の型名
    pub type_name: String,
    /// 対象プラットフォーム名
    pub platform: String,
    /// 適用時に実行するSQL
    pub up: Vec<String>,
    /// ロールバック時に実行するSQL
    pub down: Vec<String>,
    /// カラム宣言
    pub column_declaration: String,
}

/// スキーマセットアップサービス
#[derive(Debug, Clone)]
pub struct SchemaSetupService {
    registry: DomainRegistry,
    generator: EnumTypeSqlGenerator,
}

impl SchemaSetupService {
    /// 組み込みドメインで作成
    pub fn new() -> Self {
        Self::with_registry(DomainRegistry::with_builtins())
    }

    /// 任意のレジストリで作成
    pub fn with_registry(registry: DomainRegistry) -> Self {
        Self {
            registry,
            generator: EnumTypeSqlGenerator::new(),
        }
    }

    /// セットアップ計画を作成
    ///
    /// ネイティブ列挙型を持たないバックエンドでは up / down は空になりますが、
    /// ドメインの解決と空ドメインの検査はどのバックエンドでも行います。
    pub fn plan(
        &self,
        domain_name: &str,
        type_name: &str,
        platform: &dyn Platform,
    ) -> Result<SchemaSetupPlan, EnumTypeError> {
        let create = self
            .generator
            .generate_create_type_for(&self.registry, type_name, domain_name)?;

        let native_enum = platform.capabilities().native_enum;
        debug!(
            domain = %domain_name,
            type_name = %type_name,
            platform = %platform.name(),
            native_enum,
            "Planning enum type setup"
        );

        let (up, down) = if native_enum {
            (vec![create], vec![self.generator.generate_drop_type(type_name)])
        } else {
            (Vec::new(), Vec::new())
        };

        Ok(SchemaSetupPlan {
            domain: domain_name.to_string(),
            type_name: type_name.to_string(),
            platform: platform.name().to_string(),
            up,
            down,
            column_declaration: self
                .generator
                .generate_column_declaration(type_name, platform),
        })
    }
}

impl Default for SchemaSetupService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Dialect;
    use crate::core::domain::EnumDomain;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Nothing {}

    impl EnumDomain for Nothing {
        const NAME: &'static str = "nothing";
        const VARIANTS: &'static [Self] = &[];

        fn label(self) -> &'static str {
            match self {}
        }
    }

    #[test]
    fn test_plan_for_native_enum_backend() {
        let service = SchemaSetupService::new();
        let plan = service
            .plan("task_priority", "task_priority_enum", &Dialect::PostgreSQL)
            .unwrap();

        assert_eq!(plan.platform, "postgresql");
        assert_eq!(plan.up.len(), 1);
        assert!(plan.up[0].starts_with("CREATE TYPE task_priority_enum AS ENUM"));
        assert_eq!(plan.down, vec!["DROP TYPE IF EXISTS task_priority_enum"]);
        assert_eq!(plan.column_declaration, "task_priority_enum");
    }

    #[test]
    fn test_plan_for_text_backend() {
        let service = SchemaSetupService::new();
        let plan = service
            .plan("task_priority", "task_priority_enum", &Dialect::SQLite)
            .unwrap();

        assert!(plan.up.is_empty());
        assert!(plan.down.is_empty());
        assert_eq!(plan.column_declaration, "VARCHAR(255)");
    }

    #[test]
    fn test_plan_rejects_unknown_domain() {
        let service = SchemaSetupService::new();
        let err = service
            .plan("task_status", "task_status_enum", &Dialect::SQLite)
            .unwrap_err();
        assert!(err.is_unknown_domain());
    }

    #[test]
    fn test_plan_rejects_empty_domain_on_any_backend() {
        let mut registry = DomainRegistry::new();
        registry.register::<Nothing>();
        let service = SchemaSetupService::with_registry(registry);

        let err = service
            .plan("nothing", "nothing_enum", &Dialect::MySQL)
            .unwrap_err();
        assert!(err.is_domain_empty());
    }
}
