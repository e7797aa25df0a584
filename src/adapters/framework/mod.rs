//! External ML framework integration
//!
//! - [`traits`] - `ModelLoader` / `ModelExporter` collaborator traits
//! - [`ultralytics`] - Ultralytics implementation over its Python entry points

pub mod traits;
pub mod ultralytics;

pub use traits::{LoadedModel, ModelExporter, ModelLoader};
pub use ultralytics::UltralyticsFramework;
