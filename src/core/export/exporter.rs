//! Exporter - runs one export from model load to relocated artifact
//!
//! Steps, each aborting the run on failure:
//! 1. Load the model through the framework
//! 2. Export it; the framework writes `<model><suffix>` into its working directory
//! 3. Create the destination's parent chain
//! 4. Remove any existing destination
//! 5. Move the produced directory into place
//! 6. Sum regular-file sizes at the destination
//!
//! Nothing under the destination is touched until steps 1 and 2 succeed and
//! the produced directory passes the naming check.

use crate::adapters::framework::{ModelExporter, ModelLoader, UltralyticsFramework};
use crate::config::ExporterConfig;
use crate::core::fsops;
use crate::core::verification;
use crate::domain::{ExportError, ExportRequest, ExportResult, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Orchestrates a single export
pub struct Exporter {
    loader: Arc<dyn ModelLoader>,
    exporter: Arc<dyn ModelExporter>,
    verify_checksums: bool,
}

impl Exporter {
    /// Create an exporter over the given framework collaborators
    pub fn new(loader: Arc<dyn ModelLoader>, exporter: Arc<dyn ModelExporter>) -> Self {
        Self {
            loader,
            exporter,
            verify_checksums: false,
        }
    }

    /// Create an exporter backed by the Ultralytics framework
    pub fn from_config(config: &ExporterConfig) -> Self {
        let framework = Arc::new(UltralyticsFramework::new(config.framework.clone()));
        Self::new(framework.clone(), framework)
            .with_verification(config.export.verify_checksums)
    }

    /// Enable or disable digest comparison around the move
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_checksums = enabled;
        self
    }

    /// Run the export described by `request`
    ///
    /// # Errors
    ///
    /// - `ModelNotFound` if the framework cannot load the model
    /// - `ExportFailure` if the framework fails or produces no conforming directory
    /// - `Validation` if the destination overlaps the produced directory
    /// - `Filesystem` if creating, removing, moving or measuring fails
    /// - `Verification` if digests differ after the move
    pub async fn run(&self, request: &ExportRequest) -> Result<ExportResult> {
        tracing::info!(
            model = %request.model(),
            format = %request.format(),
            output = %request.output_dir().display(),
            "Starting export"
        );

        let loaded = self.loader.load(request.model()).await?;
        let produced = self.exporter.export(&loaded, request.format()).await?;

        check_produced_dir(&produced, request)?;
        check_no_overlap(&produced, request.output_dir())?;

        let output = request.output_dir().to_path_buf();
        let verify = self.verify_checksums;
        let result = tokio::task::spawn_blocking(move || relocate(&produced, &output, verify))
            .await
            .map_err(|e| ExportError::Io(format!("Relocation task failed: {e}")))??;

        tracing::info!(
            output = %result.final_directory.display(),
            total_bytes = result.total_bytes,
            file_count = result.file_count,
            relocation = ?result.relocation,
            "Export relocated"
        );

        Ok(result)
    }
}

/// The framework must hand back an existing directory named by convention
fn check_produced_dir(produced: &Path, request: &ExportRequest) -> Result<()> {
    let expected = request.expected_dir_name();
    let model = request.model().as_str();

    let actual = produced.file_name().and_then(|name| name.to_str());
    if actual != Some(expected.as_str()) {
        return Err(ExportError::export_failure(
            model,
            format!(
                "framework reported {} but the expected directory name is {expected}",
                produced.display()
            ),
        ));
    }

    match fs::symlink_metadata(produced) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ExportError::export_failure(
            model,
            format!("{} is not a directory", produced.display()),
        )),
        Err(_) => Err(ExportError::export_failure(
            model,
            format!("expected export directory {} was not created", produced.display()),
        )),
    }
}

/// Replacing the destination must not delete or nest the produced directory
fn check_no_overlap(produced: &Path, output: &Path) -> Result<()> {
    let produced_abs = fsops::comparable_path(produced)?;
    let output_abs = fsops::comparable_path(output)?;

    if produced_abs.starts_with(&output_abs) || output_abs.starts_with(&produced_abs) {
        return Err(ExportError::Validation(format!(
            "output directory {} overlaps the framework output {}",
            output.display(),
            produced.display()
        )));
    }
    Ok(())
}

/// Steps 3-6, run on the blocking pool
fn relocate(produced: &Path, output: &Path, verify: bool) -> Result<ExportResult> {
    let expected_digest = if verify {
        Some(verification::tree_digest(produced)?)
    } else {
        None
    };

    fsops::ensure_parent(output)?;
    fsops::remove_existing(output)?;
    let relocation = fsops::move_dir(produced, output)?;
    let size = fsops::tree_size(output)?;

    let digest = match expected_digest {
        Some(expected) => Some(verification::verify_tree(output, &expected)?),
        None => None,
    };

    Ok(ExportResult {
        final_directory: PathBuf::from(output),
        total_bytes: size.bytes,
        file_count: size.files,
        relocation,
        digest,
    })
}
