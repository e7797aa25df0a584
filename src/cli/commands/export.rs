//! Export command implementation
//!
//! Resolves the request from flags and configuration, then either prints a
//! dry-run plan or runs the exporter and reports the result.

use crate::config::ExporterConfig;
use crate::core::export::{ExportPlan, ExportSummary, Exporter};
use crate::domain::{ExportFormat, ExportRequest, ModelId};
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

/// Arguments for the export command
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Model name (yolo26n, yolo26s, yolo11n, yolov8n, etc.) [default: yolo26s]
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output directory, relative to the current directory [default: ../resources/public/model]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (tfjs, saved_model, openvino, ncnn, paddle) [default: tfjs]
    #[arg(short, long)]
    pub format: Option<String>,

    /// Print what would happen without running the framework or touching files
    #[arg(long)]
    pub dry_run: bool,

    /// Compare SHA-256 digests of the artifact before and after the move
    #[arg(long)]
    pub verify: bool,

    /// Print the report as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Export settings after applying CLI overrides to configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExport {
    pub request: ExportRequest,
    pub dry_run: bool,
    pub verify: bool,
}

impl ExportArgs {
    /// Apply CLI overrides on top of `config`
    ///
    /// # Errors
    ///
    /// Returns a message if the model identifier or format is invalid.
    pub fn resolve(&self, config: &ExporterConfig) -> Result<ResolvedExport, String> {
        let model_str = self.model.as_deref().unwrap_or(&config.export.model);
        let model = ModelId::from_str(model_str)?;

        let format_str = self.format.as_deref().unwrap_or(&config.export.format);
        let format = ExportFormat::from_str(format_str)?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output.clone());

        Ok(ResolvedExport {
            request: ExportRequest::new(model, output).with_format(format),
            dry_run: self.dry_run || config.application.dry_run,
            verify: self.verify || config.export.verify_checksums,
        })
    }

    /// Execute the export command
    pub async fn execute(&self, config: &ExporterConfig) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let resolved = match self.resolve(config) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Invalid export arguments");
                eprintln!("Invalid export arguments: {e}");
                return Ok(2);
            }
        };
        let request = &resolved.request;

        if resolved.dry_run {
            tracing::info!("Dry run mode enabled - framework will not be invoked");
            let plan = ExportPlan::new(request, &config.framework);
            if self.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("🔍 DRY RUN - nothing will be exported or moved");
                for line in plan.describe() {
                    println!("  {line}");
                }
            }
            return Ok(0);
        }

        if !self.json {
            println!(
                "🚀 Exporting {} to {} format...",
                request.model(),
                request.format()
            );
        }

        let started = Instant::now();
        let exporter = Exporter::from_config(config).with_verification(resolved.verify);
        let result = match exporter.run(request).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("❌ Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = ExportSummary::new(request.model().clone(), request.format(), result)
            .with_duration(started.elapsed());
        summary.log_summary();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            for line in summary.describe() {
                println!("{line}");
            }
            if let Some(digest) = &summary.result.digest {
                println!("Verified digest: {digest}");
            }
        }

        Ok(0)
    }
}
