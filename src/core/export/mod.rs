//! Export orchestration and reporting
//!
//! - [`exporter`] - The load, export, relocate and measure workflow
//! - [`plan`] - Dry-run description of a request
//! - [`summary`] - Reporting of a finished export

pub mod exporter;
pub mod plan;
pub mod summary;

pub use exporter::Exporter;
pub use plan::ExportPlan;
pub use summary::{format_size, ExportSummary};
