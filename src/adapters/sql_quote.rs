// SQLクォートユーティリティ
//
// 型名（識別子）と列挙ラベル（文字列リテラル）のクォート関数を提供します。

use regex::Regex;
use std::sync::OnceLock;

/// クォート不要な識別子のパターン
fn plain_identifier_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[a-z_][a-z0-9_]*$").ok())
        .as_ref()
}

/// クォートせずに使用できる識別子かどうか
///
/// 小文字・数字・アンダースコアのみで構成され、数字で始まらないもの。
pub fn is_plain_identifier(name: &str) -> bool {
    plain_identifier_pattern().is_some_and(|re| re.is_match(name))
}

/// PostgreSQL用識別子クォート（ダブルクォート）
///
/// 識別子内のダブルクォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use enumtype::adapters::sql_quote::quote_identifier_postgres;
/// assert_eq!(quote_identifier_postgres("users"), r#""users""#);
/// assert_eq!(quote_identifier_postgres(r#"table"name"#), r#""table""name""#);
/// ```
pub fn quote_identifier_postgres(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// 型名をDDL用に整形
///
/// 単純な識別子はそのまま、それ以外はクォートします。
///
/// # Examples
/// ```
/// use enumtype::adapters::sql_quote::format_type_name;
/// assert_eq!(format_type_name("task_priority_enum"), "task_priority_enum");
/// assert_eq!(format_type_name("TaskPriority"), r#""TaskPriority""#);
/// ```
pub fn format_type_name(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        quote_identifier_postgres(name)
    }
}

/// 文字列リテラルクォート（シングルクォート）
///
/// リテラル内のシングルクォートは二重にエスケープします。
///
/// # Examples
/// ```
/// use enumtype::adapters::sql_quote::quote_string_literal;
/// assert_eq!(quote_string_literal("haute"), "'haute'");
/// assert_eq!(quote_string_literal("l'urgence"), "'l''urgence'");
/// ```
pub fn quote_string_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// 文字列リテラルのリストをクォートしてカンマ区切りで結合
pub fn quote_string_literals(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| quote_string_literal(value))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_plain_identifier() {
        assert!(is_plain_identifier("task_priority_enum"));
        assert!(is_plain_identifier("_enum2"));
        assert!(!is_plain_identifier("2enum"));
        assert!(!is_plain_identifier("TaskPriority"));
        assert!(!is_plain_identifier("task priority"));
        assert!(!is_plain_identifier(""));
    }

    #[test]
    fn test_format_type_name_quotes_when_needed() {
        assert_eq!(format_type_name("task_priority_enum"), "task_priority_enum");
        assert_eq!(format_type_name("task-priority"), r#""task-priority""#);
        assert_eq!(format_type_name(r#"a"b"#), r#""a""b""#);
    }

    #[test]
    fn test_quote_string_literal_with_embedded_quote() {
        // シングルクォートは '' にエスケープ
        assert_eq!(quote_string_literal("it's"), "'it''s'");
        assert_eq!(quote_string_literal("'"), "''''");
        assert_eq!(quote_string_literal(""), "''");
    }

    #[test]
    fn test_quote_string_literals() {
        assert_eq!(
            quote_string_literals(&["basse", "normale"]),
            "'basse', 'normale'"
        );
        assert_eq!(quote_string_literals(&[]), "");
    }
}
