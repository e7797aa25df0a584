//! External system integrations for yolo-export.
//!
//! - [`framework`] - The ML framework that loads and converts models
//!
//! # Design Pattern
//!
//! Adapters isolate the external framework behind traits so the export
//! workflow can run against fakes in tests.
//!
//! ```rust,no_run
//! use yolo_export::adapters::framework::{ModelExporter, ModelLoader, UltralyticsFramework};
//! use yolo_export::config::FrameworkConfig;
//! use yolo_export::domain::{ExportFormat, ModelId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let framework = UltralyticsFramework::new(FrameworkConfig::default());
//! let model = framework.load(&ModelId::new("yolo26s")?).await?;
//! let produced = framework.export(&model, ExportFormat::Tfjs).await?;
//! println!("framework wrote {}", produced.display());
//! # Ok(())
//! # }
//! ```

pub mod framework;
