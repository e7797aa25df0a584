//! CLI interface and argument parsing
//!
//! Running without a subcommand exports, so `yolo-export --model yolo26n`
//! and `yolo-export export --model yolo26n` are equivalent.

pub mod commands;

use clap::{Parser, Subcommand};

/// yolo-export - Export YOLO models for browser inference
#[derive(Parser, Debug)]
#[command(name = "yolo-export")]
#[command(version, about, long_about = None)]
#[command(author = "yolo-export Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./yolo-export.toml when present)
    #[arg(short, long, env = "YOLO_EXPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "YOLO_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Export options used when no subcommand is given
    #[command(flatten)]
    pub export: commands::export::ExportArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Export arguments in effect: the subcommand's, else the top-level ones
    pub fn export_args(&self) -> Option<&commands::export::ExportArgs> {
        match &self.command {
            Some(Commands::Export(args)) => Some(args),
            None => Some(&self.export),
            Some(_) => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a model and move the artifact into place (default)
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
