// yolo-export - Export YOLO models to browser-deployable formats
// Copyright (c) 2025 yolo-export Contributors
// Licensed under the MIT License

use clap::Parser;
use std::path::Path;
use std::process;
use yolo_export::cli::{Cli, Commands};
use yolo_export::config::{resolve_config, ExporterConfig, LoggingConfig, DEFAULT_CONFIG_FILE};
use yolo_export::domain::Result;
use yolo_export::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Optional .env file; a missing one is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // init writes a config file, so it never reads one
    let loaded = match cli.command {
        Some(Commands::Init(_)) => None,
        _ => Some(resolve_config(cli.config.as_deref())),
    };

    let config = loaded.as_ref().and_then(|r| r.as_ref().ok());
    let logging_config = config
        .map(|c| c.logging.clone())
        .unwrap_or_else(LoggingConfig::default);
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(2);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "yolo-export");

    let exit_code = match execute_command(&cli, loaded).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(
    cli: &Cli,
    loaded: Option<Result<ExporterConfig>>,
) -> anyhow::Result<i32> {
    match (&cli.command, loaded) {
        (Some(Commands::Init(args)), _) => args.execute().await,
        (Some(Commands::ValidateConfig(args)), Some(loaded)) => {
            let source = match cli.config.as_deref() {
                Some(path) => path,
                None if Path::new(DEFAULT_CONFIG_FILE).exists() => DEFAULT_CONFIG_FILE,
                None => "built-in defaults",
            };
            args.execute(source, loaded).await
        }
        (_, Some(Err(e))) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("{e}");
            Ok(2)
        }
        (_, Some(Ok(config))) => match cli.export_args() {
            Some(args) => args.execute(&config).await,
            None => Ok(0),
        },
        (_, None) => Ok(0),
    }
}
