//! Init command implementation
//!
//! Writes a commented sample configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Install the framework: pip install ultralytics");
                println!("  2. Edit {} with your settings", self.output);
                println!("  3. Validate configuration: yolo-export validate-config");
                println!("  4. Run export: yolo-export");
                println!();
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write configuration file");
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(1)
            }
        }
    }

    /// Sample configuration with every setting at its default
    fn generate_config() -> &'static str {
        r#"# yolo-export configuration
# Every value below is the built-in default; delete what you don't change.
# ${VAR} placeholders are replaced from the environment (and .env).

[application]
log_level = "info"          # trace | debug | info | warn | error
dry_run = false

[export]
model = "yolo26s"           # yolo26n, yolo26s, yolo11n, yolov8n, ...
output = "../resources/public/model"
format = "tfjs"             # tfjs | saved_model | openvino | ncnn | paddle
verify_checksums = false

[framework]
python = "python3"          # interpreter with ultralytics installed
yolo = "yolo"               # ultralytics CLI
weights_extension = ".pt"
working_dir = "."           # where weights are read and exports are written
timeout_seconds = 0         # 0 = no limit

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"    # daily | hourly | never
"#
    }
}
