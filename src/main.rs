use anyhow::{Context, Result};
use clap::Parser;
use colored::control as color_control;
use enumtype::cli::commands::check::{CheckCommand, CheckCommandHandler};
use enumtype::cli::commands::convert::{ConvertCommand, ConvertCommandHandler};
use enumtype::cli::commands::ddl::{DdlCommand, DdlCommandHandler};
use enumtype::cli::{Cli, Commands};
use enumtype::core::naming::LOG_ENV;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    sqlx::any::install_default_drivers();

    // CLIをパースして実行
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 非同期ランタイムを作成して実行
    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime")
        .unwrap_or_else(|e| {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        });

    let result = runtime.block_on(run_command(cli));

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// トレーシングを初期化する
///
/// `ENUMTYPE_LOG` が設定されていればそれを優先します。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// コマンドを実行する
async fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    // --config フラグの処理（絶対パスに変換）
    let config_path: Option<PathBuf> = cli.config.map(|p| {
        if p.is_absolute() {
            p
        } else {
            project_path.join(p)
        }
    });

    match cli.command {
        Commands::Ddl {
            dialect,
            domain,
            type_name,
        } => {
            let handler = DdlCommandHandler::new();
            let command = DdlCommand {
                project_path,
                config_path,
                dialect,
                domain,
                type_name,
                format: cli.format,
            };
            handler.execute(&command)
        }

        Commands::Convert { direction } => {
            let handler = ConvertCommandHandler::new();
            let command = ConvertCommand {
                direction,
                format: cli.format,
            };
            handler.execute(&command)
        }

        Commands::Check { env } => {
            let handler = CheckCommandHandler::new();
            let command = CheckCommand {
                project_path,
                config_path,
                env,
                format: cli.format,
            };
            handler.execute(&command).await
        }
    }
}
