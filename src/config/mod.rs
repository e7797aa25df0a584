//! Configuration management for yolo-export.
//!
//! # Overview
//!
//! Configuration is optional. Defaults reproduce the plain command
//! (`yolo26s` exported as `tfjs` into `../resources/public/model`); a TOML file
//! and `YOLO_EXPORT_*` environment variables can change them, and CLI flags
//! override both.
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`ExportConfig`] - Model, destination, format, checksum verification
//! - [`FrameworkConfig`] - How the external framework is invoked
//! - [`LoggingConfig`] - Optional rolling file logs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! model = "yolo26n"
//! output = "../resources/public/model"
//! format = "tfjs"
//!
//! [framework]
//! python = "${VIRTUAL_ENV}/bin/python"
//! yolo = "${VIRTUAL_ENV}/bin/yolo"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, ExportConfig, ExporterConfig, FrameworkConfig, LoggingConfig};
