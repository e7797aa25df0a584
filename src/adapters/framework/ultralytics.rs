//! Ultralytics framework driven through its Python entry points
//!
//! Loading runs a short probe script under the configured interpreter that
//! instantiates `ultralytics.YOLO` on the weights file; exporting runs the
//! framework CLI (`yolo export model=<weights> format=<fmt>`). Both run in
//! `framework.working_dir`, which is also where the export lands.

use super::traits::{LoadedModel, ModelExporter, ModelLoader};
use crate::config::FrameworkConfig;
use crate::domain::{ExportError, ExportFormat, ModelId, Result};
use crate::{log_step_complete, log_step_start};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

/// Instantiates the model; the weights file arrives as argv[1]
const LOAD_PROBE: &str = "import sys\nfrom ultralytics import YOLO\nYOLO(sys.argv[1])\n";

/// Lines of framework stderr kept in error messages
const STDERR_TAIL_LINES: usize = 5;

/// Ultralytics-backed loader and exporter
#[derive(Debug, Clone)]
pub struct UltralyticsFramework {
    config: FrameworkConfig,
}

impl UltralyticsFramework {
    /// Creates a new framework driver
    pub fn new(config: FrameworkConfig) -> Self {
        Self { config }
    }

    /// Weights file name for `model`, e.g. `yolo26s.pt`
    pub fn weights_file(&self, model: &ModelId) -> String {
        format!("{}{}", model.as_str(), self.config.weights_extension)
    }

    /// Directory the framework writes `format` output for `model` into
    pub fn produced_dir(&self, model: &ModelId, format: ExportFormat) -> PathBuf {
        self.config
            .working_dir
            .join(format.produced_dir_name(model))
    }

    fn timeout(&self) -> Option<Duration> {
        match self.config.timeout_seconds {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[async_trait]
impl ModelLoader for UltralyticsFramework {
    async fn load(&self, model: &ModelId) -> Result<LoadedModel> {
        let started = Instant::now();
        let weights = self.weights_file(model);
        log_step_start!("load", model);

        let output = run_framework_command(
            &self.config.python,
            &["-c", LOAD_PROBE, &weights],
            &self.config.working_dir,
            self.timeout(),
        )
        .await
        .map_err(|e| ExportError::model_not_found(model.as_str(), e.to_string()))?;

        if !output.success {
            tracing::error!(
                model = %model,
                exit_code = ?output.exit_code,
                "Framework could not load model"
            );
            return Err(ExportError::model_not_found(
                model.as_str(),
                output.failure_reason(),
            ));
        }

        log_step_complete!("load", model, started.elapsed());
        Ok(LoadedModel::new(model.clone(), weights))
    }
}

#[async_trait]
impl ModelExporter for UltralyticsFramework {
    async fn export(&self, model: &LoadedModel, format: ExportFormat) -> Result<PathBuf> {
        let started = Instant::now();
        log_step_start!("export", model.id());

        let model_arg = format!("model={}", model.weights().display());
        let format_arg = format!("format={}", format.as_str());

        let output = run_framework_command(
            &self.config.yolo,
            &["export", &model_arg, &format_arg],
            &self.config.working_dir,
            self.timeout(),
        )
        .await
        .map_err(|e| ExportError::export_failure(model.id().as_str(), e.to_string()))?;

        if !output.success {
            tracing::error!(
                model = %model.id(),
                format = %format,
                exit_code = ?output.exit_code,
                "Framework export failed"
            );
            return Err(ExportError::export_failure(
                model.id().as_str(),
                output.failure_reason(),
            ));
        }

        log_step_complete!("export", model.id(), started.elapsed());
        Ok(self.produced_dir(model.id(), format))
    }
}

/// Captured output of a finished framework process
#[derive(Debug, Clone)]
struct CommandOutput {
    success: bool,
    exit_code: Option<i32>,
    stderr: String,
}

impl CommandOutput {
    fn failure_reason(&self) -> String {
        let tail = tail_lines(&self.stderr, STDERR_TAIL_LINES);
        match (self.exit_code, tail.is_empty()) {
            (Some(code), true) => format!("process exited with status {code}"),
            (Some(code), false) => format!("process exited with status {code}: {tail}"),
            (None, true) => "process terminated by signal".to_string(),
            (None, false) => format!("process terminated by signal: {tail}"),
        }
    }
}

/// Why a framework process could not produce an exit status
#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("command '{0}' not found in PATH")]
    NotFound(String),

    #[error("failed to run '{program}': {message}")]
    Spawn { program: String, message: String },

    #[error("'{program}' did not finish within {secs}s")]
    TimedOut { program: String, secs: u64 },
}

async fn run_framework_command(
    program: &str,
    args: &[&str],
    working_dir: &Path,
    timeout: Option<Duration>,
) -> std::result::Result<CommandOutput, CommandError> {
    tracing::debug!(program = %program, args = ?args, cwd = %working_dir.display(), "Running framework command");

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CommandError::NotFound(program.to_string())
        } else {
            CommandError::Spawn {
                program: program.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    let waited = match timeout {
        Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| CommandError::TimedOut {
                program: program.to_string(),
                secs: limit.as_secs(),
            })?,
        None => child.wait_with_output().await,
    };

    let output = waited.map_err(|e| CommandError::Spawn {
        program: program.to_string(),
        message: e.to_string(),
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
        tracing::debug!(program = %program, "{}", line);
    }

    Ok(CommandOutput {
        success: output.status.success(),
        exit_code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Last `n` non-empty lines of `text`, joined with " | "
fn tail_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join(" | ")
}
