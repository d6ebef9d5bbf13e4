// Adapters
// 列挙型カラムの変換フック、DDL生成、データベースアクセス

pub mod connection_string;
pub mod database;
pub mod enum_type;
pub mod platform;
pub mod sql_generator;
pub mod sql_quote;
pub mod sqlx_codec;
