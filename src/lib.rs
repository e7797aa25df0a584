// yolo-export - Export YOLO models to browser-deployable formats
// Copyright (c) 2025 yolo-export Contributors
// Licensed under the MIT License

//! # yolo-export
//!
//! Loads a pretrained YOLO model through the Ultralytics framework, exports
//! it to a browser-deployable format (TensorFlow.js by default), moves the
//! produced directory to its destination and reports its size.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export workflow, filesystem operations, verification
//! - [`adapters`] - The external ML framework behind `ModelLoader`/`ModelExporter`
//! - [`domain`] - Identifiers, formats, requests, results, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yolo_export::config::resolve_config;
//! use yolo_export::core::export::Exporter;
//! use yolo_export::domain::{ExportRequest, ModelId};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = resolve_config(None)?;
//!     let exporter = Exporter::from_config(&config);
//!
//!     let request = ExportRequest::new(ModelId::new("yolo26s")?, "../resources/public/model");
//!     let result = exporter.run(&request).await?;
//!
//!     println!("Total size: {} bytes", result.total_bytes);
//!     Ok(())
//! }
//! ```
//!
//! ## Testing without the framework
//!
//! [`core::export::Exporter::new`] takes any [`adapters::framework::ModelLoader`]
//! and [`adapters::framework::ModelExporter`], so the workflow can be driven
//! by stubs that write a directory tree of known size.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
