// コマンドハンドラー層
// 各CLIコマンドの実装

pub mod check;
pub mod convert;
pub mod ddl;
