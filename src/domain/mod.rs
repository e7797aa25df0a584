//! Domain models and types for yolo-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ModelId`])
//! - **Export formats** ([`ExportFormat`]) and their directory naming convention
//! - **Request/result models** ([`ExportRequest`], [`ExportResult`])
//! - **Error types** ([`ExportError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use yolo_export::domain::{ExportFormat, ExportRequest, ModelId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = ExportRequest::new(ModelId::new("yolo26s")?, "./out/model")
//!     .with_format(ExportFormat::Tfjs);
//! assert_eq!(request.expected_dir_name(), "yolo26s_web_model");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod export;
pub mod format;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ExportError, FsOperation};
pub use export::{ExportRequest, ExportResult, Relocation};
pub use format::ExportFormat;
pub use ids::ModelId;
pub use result::Result;
