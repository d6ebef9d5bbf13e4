// 列挙ドメイン定義
//
// 閉じたタグ集合と保存ラベルの対応表を、コンパイル時に固定されたデータとして扱います。
// DDL生成側は DomainDefinition を通してラベル一覧のみを参照します。

use crate::core::error::EnumTypeError;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// 列挙ドメイン
///
/// 各タグはちょうど1つの保存ラベルに対応します。
/// `VARIANTS` の並び順がそのままDDLのラベル順になります。
pub trait EnumDomain: Copy + Eq + Sized + 'static {
    /// ドメイン名（エラーメッセージとレジストリのキーに使用）
    const NAME: &'static str;

    /// 全タグ（定義順）
    const VARIANTS: &'static [Self];

    /// タグに対応する保存ラベル
    fn label(self) -> &'static str;

    /// 保存ラベルからタグを取得
    ///
    /// 完全一致のみ受け付けます。大文字小文字違いや空文字列は
    /// `InvalidDomainValue` になります。
    fn from_label(label: &str) -> Result<Self, EnumTypeError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.label() == label)
            .ok_or_else(|| EnumTypeError::invalid_value(label, Self::NAME))
    }

    /// 全ラベル（定義順）
    fn labels() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|variant| variant.label()).collect()
    }
}

/// ドメイン定義
///
/// DDL生成に必要なドメイン名とラベル一覧。
/// `EnumDomain` を実装した型からのみ構築できます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainDefinition {
    name: &'static str,
    labels: Vec<&'static str>,
}

impl DomainDefinition {
    /// 列挙ドメイン型から定義を作成
    pub fn of<T: EnumDomain>() -> Self {
        Self {
            name: T::NAME,
            labels: T::labels(),
        }
    }

    /// ドメイン名
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// ラベル一覧（定義順）
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// ラベルが1つもないかどうか
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// ラベルが重複していないかどうか
    pub fn has_unique_labels(&self) -> bool {
        self.duplicate_label().is_none()
    }

    /// 最初に重複したラベル
    pub fn duplicate_label(&self) -> Option<&'static str> {
        let mut seen = HashSet::new();
        self.labels.iter().copied().find(|label| !seen.insert(*label))
    }

    /// DDLを生成できるドメインか検査
    ///
    /// ラベルが空なら `DomainEmpty`、重複があれば `DuplicateLabel`。
    pub fn validate(&self) -> Result<(), EnumTypeError> {
        if self.is_empty() {
            return Err(EnumTypeError::DomainEmpty {
                domain: self.name.to_string(),
            });
        }
        if let Some(label) = self.duplicate_label() {
            return Err(EnumTypeError::DuplicateLabel {
                domain: self.name.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }
}

/// ドメインレジストリ
///
/// ドメイン識別子からドメイン定義を解決します。
#[derive(Debug, Clone, Default)]
pub struct DomainRegistry {
    domains: BTreeMap<&'static str, DomainDefinition>,
}

impl DomainRegistry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み込みドメインを登録したレジストリを作成
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<crate::core::priority::TaskPriority>();
        registry
    }

    /// ドメインを登録
    ///
    /// 同名のドメインが既にある場合は上書きします。
    pub fn register<T: EnumDomain>(&mut self) -> &mut Self {
        self.domains.insert(T::NAME, DomainDefinition::of::<T>());
        self
    }

    /// ドメイン識別子から定義を解決
    pub fn resolve(&self, name: &str) -> Result<&DomainDefinition, EnumTypeError> {
        self.domains
            .get(name)
            .ok_or_else(|| EnumTypeError::UnknownDomain {
                domain: name.to_string(),
            })
    }

    /// 登録済みのドメイン名（名前順）
    pub fn names(&self) -> Vec<&'static str> {
        self.domains.keys().copied().collect()
    }
}
