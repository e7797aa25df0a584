//! Core logic for yolo-export.
//!
//! # Modules
//!
//! - [`export`] - Export orchestration, dry-run plans, and summaries
//! - [`fsops`] - Replace-if-exists, move, and size accounting on the filesystem
//! - [`verification`] - Tree digests around relocation
//!
//! # Export Workflow
//!
//! 1. **Load**: the framework resolves the model's weights
//! 2. **Export**: the framework writes `<model>_web_model` (for `tfjs`)
//! 3. **Replace**: the destination's parent is created and any old destination removed
//! 4. **Move**: the produced directory is renamed (or copied) into place
//! 5. **Measure**: regular-file sizes under the destination are summed
//!
//! # Example
//!
//! ```rust,no_run
//! use yolo_export::config::ExporterConfig;
//! use yolo_export::core::export::Exporter;
//! use yolo_export::domain::{ExportRequest, ModelId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExporterConfig::default();
//! let exporter = Exporter::from_config(&config);
//!
//! let request = ExportRequest::new(ModelId::new("yolo26s")?, "./out/model");
//! let result = exporter.run(&request).await?;
//!
//! println!("{} bytes in {}", result.total_bytes, result.final_directory.display());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fsops;
pub mod verification;
