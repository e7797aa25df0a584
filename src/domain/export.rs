//! Export request and result models
//!
//! Both live for a single invocation: the request is built once from CLI and
//! configuration input, the result is produced once and reported.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::format::ExportFormat;
use super::ids::ModelId;

/// What to export and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    model: ModelId,
    output_dir: PathBuf,
    format: ExportFormat,
}

impl ExportRequest {
    /// Creates a request for the default (`tfjs`) format
    ///
    /// The destination is stored without trailing separators: `model/` on a
    /// symlink would otherwise resolve to the link's target.
    pub fn new(model: ModelId, output_dir: impl Into<PathBuf>) -> Self {
        let output_dir: PathBuf = output_dir.into();
        Self {
            model,
            output_dir: output_dir.components().collect(),
            format: ExportFormat::default(),
        }
    }

    /// Sets the export format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Model to export
    pub fn model(&self) -> &ModelId {
        &self.model
    }

    /// Destination directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Target format
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Name of the directory the framework is expected to produce
    pub fn expected_dir_name(&self) -> String {
        self.format.produced_dir_name(&self.model)
    }
}

/// How the produced directory reached its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relocation {
    /// Single `rename` on the same volume
    Renamed,
    /// Recursive copy followed by removal of the source
    Copied,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportResult {
    /// Where the artifact ended up
    pub final_directory: PathBuf,

    /// Sum of regular-file sizes under `final_directory`
    pub total_bytes: u64,

    /// Number of regular files under `final_directory`
    pub file_count: usize,

    /// Strategy used to move the directory
    pub relocation: Relocation,

    /// Tree digest, when checksum verification ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ExportResult {
    /// Total size in mebibytes
    pub fn total_megabytes(&self) -> f64 {
        self.total_bytes as f64 / 1024.0 / 1024.0
    }
}
