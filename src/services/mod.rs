// Services Layer
// ドメインロジックを組み合わせて実行するサービス層

pub mod config_loader;
pub mod priority_check;
pub mod schema_setup;
