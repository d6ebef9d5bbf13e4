// Core Domain
// 列挙ドメイン、エラー、設定の純粋なドメインロジック

pub mod config;
pub mod domain;
pub mod error;
pub mod naming;
pub mod priority;
