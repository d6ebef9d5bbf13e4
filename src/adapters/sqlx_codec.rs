// SQLx型アダプター
//
// 列挙ドメインをSQLxのバインド値・取得値として直接扱えるようにします。
// Encode は書き込みフック、Decode は読み込みフックに委譲します。
// 読み込み時の InvalidDomainValue は SQLx のカラムデコードエラーとして返ります。
//
// PostgreSQLでは名前付きの列挙型を型情報とし、テキストカラムも受け付けます。
// SQLite / MySQL ではテキストカラムとして扱います。
//
// 型情報の型名はコンパイル時に固定された `EnumColumnType::TYPE_NAME` です。
// 設定ファイルの `type_name` で別名の型を作成した場合、その型のカラムには
// TaskPriority を直接バインドできません（テキストとしてキャストして扱います）。

use crate::adapters::enum_type::TaskPriorityEnumType;
use crate::core::priority::TaskPriority;

/// 列挙ドメインに SQLx の Type / Encode / Decode を実装する
///
/// # Examples
/// ```ignore
/// impl_sqlx_enum_column!(TaskPriority, TaskPriorityEnumType);
/// ```
#[macro_export]
macro_rules! impl_sqlx_enum_column {
    (@text $domain:ty, $db:ty) => {
        impl ::sqlx::Type<$db> for $domain {
            fn type_info() -> <$db as ::sqlx::Database>::TypeInfo {
                <::std::string::String as ::sqlx::Type<$db>>::type_info()
            }

            fn compatible(ty: &<$db as ::sqlx::Database>::TypeInfo) -> bool {
                <::std::string::String as ::sqlx::Type<$db>>::compatible(ty)
            }
        }
    };

    (@codec $domain:ty, $column:ty, $db:ty) => {
        impl<'q> ::sqlx::Encode<'q, $db> for $domain {
            fn encode_by_ref(
                &self,
                buf: &mut <$db as ::sqlx::Database>::ArgumentBuffer<'q>,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                let column = <$column as ::std::default::Default>::default();
                let label: &'static str =
                    $crate::adapters::enum_type::EnumColumnType::to_storage(&column, *self);
                <&str as ::sqlx::Encode<'q, $db>>::encode_by_ref(&label, buf)
            }
        }

        impl<'r> ::sqlx::Decode<'r, $db> for $domain {
            fn decode(
                value: <$db as ::sqlx::Database>::ValueRef<'r>,
            ) -> ::std::result::Result<Self, ::sqlx::error::BoxDynError> {
                let label = <&'r str as ::sqlx::Decode<'r, $db>>::decode(value)?;
                let column = <$column as ::std::default::Default>::default();
                Ok($crate::adapters::enum_type::EnumColumnType::from_storage(
                    &column, label,
                )?)
            }
        }
    };

    ($domain:ty, $column:ty) => {
        impl ::sqlx::Type<::sqlx::Postgres> for $domain {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                ::sqlx::postgres::PgTypeInfo::with_name(
                    <$column as $crate::adapters::enum_type::EnumColumnType>::TYPE_NAME,
                )
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                *ty == <Self as ::sqlx::Type<::sqlx::Postgres>>::type_info()
                    || <::std::string::String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        $crate::impl_sqlx_enum_column!(@codec $domain, $column, ::sqlx::Postgres);

        $crate::impl_sqlx_enum_column!(@text $domain, ::sqlx::Sqlite);
        $crate::impl_sqlx_enum_column!(@codec $domain, $column, ::sqlx::Sqlite);

        $crate::impl_sqlx_enum_column!(@text $domain, ::sqlx::MySql);
        $crate::impl_sqlx_enum_column!(@codec $domain, $column, ::sqlx::MySql);
    };
}

crate::impl_sqlx_enum_column!(TaskPriority, TaskPriorityEnumType);
