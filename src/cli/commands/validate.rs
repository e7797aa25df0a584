//! Validate config command implementation

use crate::config::ExporterConfig;
use crate::domain::Result;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// `loaded` is the outcome of resolving `source`; loading already ran
    /// validation, so an `Ok` here is a valid configuration.
    pub async fn execute(&self, source: &str, loaded: Result<ExporterConfig>) -> anyhow::Result<i32> {
        tracing::info!(source = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match loaded {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Model: {}", config.export.model);
        println!("  Output: {}", config.export.output.display());
        println!("  Format: {}", config.export.format);
        println!("  Verify Checksums: {}", config.export.verify_checksums);
        println!("  Python: {}", config.framework.python);
        println!("  Framework CLI: {}", config.framework.yolo);
        println!(
            "  Working Directory: {}",
            config.framework.working_dir.display()
        );
        if config.framework.timeout_seconds > 0 {
            println!("  Timeout: {}s", config.framework.timeout_seconds);
        }
        if config.logging.local_enabled {
            println!(
                "  File Logs: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}
