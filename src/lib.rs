// enumtypeライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（診断用ハーネスのコマンドルーティング）
// - core: コアドメインロジック（列挙ドメイン、エラー、設定）
// - adapters: 値変換フック、DDL生成、データベースアクセス
// - services: スキーマセットアップと往復検証

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;
