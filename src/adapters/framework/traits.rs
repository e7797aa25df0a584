//! Collaborator traits for the external ML framework
//!
//! The exporter only ever talks to the framework through these two traits,
//! which keeps it testable with in-process fakes.

use crate::domain::{ExportFormat, ModelId, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Handle to a model the framework has successfully loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModel {
    id: ModelId,
    weights: PathBuf,
}

impl LoadedModel {
    /// Creates a handle for `id` backed by the `weights` file
    pub fn new(id: ModelId, weights: impl Into<PathBuf>) -> Self {
        Self {
            id,
            weights: weights.into(),
        }
    }

    /// Model identifier
    pub fn id(&self) -> &ModelId {
        &self.id
    }

    /// Weights file as passed to the framework
    pub fn weights(&self) -> &Path {
        &self.weights
    }
}

/// Resolves a model identifier into a loaded model
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Locate and load the artifact named `model`
    ///
    /// # Errors
    ///
    /// Returns `ExportError::ModelNotFound` if the artifact cannot be located or loaded.
    async fn load(&self, model: &ModelId) -> Result<LoadedModel>;
}

/// Converts a loaded model into a serialized artifact directory
#[async_trait]
pub trait ModelExporter: Send + Sync {
    /// Export `model` to `format` and return the directory the framework wrote
    ///
    /// # Errors
    ///
    /// Returns `ExportError::ExportFailure` if the framework reports a failure.
    async fn export(&self, model: &LoadedModel, format: ExportFormat) -> Result<PathBuf>;
}
