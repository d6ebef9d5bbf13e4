// CLI Layer
// 診断用ハーネスのユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use crate::core::naming::{APP_NAME, DEFAULT_DOMAIN, DEFAULT_ENVIRONMENT};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// enumtype - Native database enum column diagnostics
///
/// Generate enum type DDL and exercise the priority column conversion.
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(author = "Enumtype Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Native database enum column diagnostics")]
#[command(propagate_version = true)]
#[command(after_help = "EXAMPLES:
  enumtype ddl --dialect postgresql
  enumtype convert to-storage HIGH
  enumtype convert from-storage haute
  enumtype check --env development")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the enum type DDL and column declaration
    ///
    /// EXAMPLES:
    ///   enumtype ddl --dialect postgresql
    ///   enumtype ddl --dialect sqlite --type-name priority_level
    Ddl {
        /// Target database dialect (postgresql, mysql, sqlite)
        #[arg(short, long)]
        dialect: Option<String>,

        /// Enum domain identifier
        #[arg(long, default_value = DEFAULT_DOMAIN)]
        domain: String,

        /// Database type name
        #[arg(long)]
        type_name: Option<String>,
    },

    /// Run the value conversion in either direction
    Convert {
        #[command(subcommand)]
        direction: ConvertDirection,
    },

    /// Round-trip every priority through a live database
    ///
    /// Creates a scratch table (and the enum type on backends with native
    /// enums), writes and reads back each priority, then checks that an
    /// invalid label is rejected. Everything created is dropped afterwards.
    Check {
        /// Target environment
        #[arg(short, long, default_value = DEFAULT_ENVIRONMENT)]
        env: String,
    },
}

/// Conversion direction
#[derive(Subcommand, Debug, Clone)]
pub enum ConvertDirection {
    /// Tag name (LOW, MEDIUM, HIGH, CRITICAL) to stored label
    ToStorage {
        /// Priority tag name
        tag: String,
    },
    /// Stored label to tag name
    FromStorage {
        /// Stored label
        label: String,
    },
}
