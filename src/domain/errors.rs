//! Domain error types
//!
//! This module defines the error hierarchy for yolo-export.
//! Errors carry plain strings and paths so that neither subprocess nor
//! filesystem types leak out of the adapters.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type
///
/// Every step of an export run maps its failure onto one of these variants.
/// None of them are recovered locally; the command aborts and reports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The framework could not locate or load the named model
    #[error("Model not found: {model}: {reason}")]
    ModelNotFound { model: String, reason: String },

    /// The framework reported a conversion failure, or produced no usable directory
    #[error("Export failed for {model}: {reason}")]
    ExportFailure { model: String, reason: String },

    /// A create/delete/move/stat operation failed
    #[error("Filesystem error during {operation} on {}: {message}", path.display())]
    Filesystem {
        operation: FsOperation,
        path: PathBuf,
        message: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Relocated tree differs from the produced tree
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors not tied to a specific filesystem step
    #[error("I/O error: {0}")]
    Io(String),
}

/// Filesystem step that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    CreateParent,
    Remove,
    Move,
    Copy,
    Measure,
}

impl fmt::Display for FsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FsOperation::CreateParent => "create-parent",
            FsOperation::Remove => "remove",
            FsOperation::Move => "move",
            FsOperation::Copy => "copy",
            FsOperation::Measure => "measure",
        };
        f.write_str(name)
    }
}

impl ExportError {
    /// Creates a `ModelNotFound` error
    pub fn model_not_found(model: impl Into<String>, reason: impl Into<String>) -> Self {
        ExportError::ModelNotFound {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `ExportFailure` error
    pub fn export_failure(model: impl Into<String>, reason: impl Into<String>) -> Self {
        ExportError::ExportFailure {
            model: model.into(),
            reason: reason.into(),
        }
    }

    /// Wraps an I/O error raised while performing `operation` on `path`
    pub fn filesystem(
        operation: FsOperation,
        path: impl Into<PathBuf>,
        err: impl fmt::Display,
    ) -> Self {
        ExportError::Filesystem {
            operation,
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Exit code reported by the binary for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::Configuration(_) | ExportError::Validation(_) => 2,
            _ => 1,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_display() {
        let err = ExportError::model_not_found("not-a-real-model", "weights missing");
        assert_eq!(
            err.to_string(),
            "Model not found: not-a-real-model: weights missing"
        );
    }

    #[test]
    fn test_filesystem_error_display() {
        let err = ExportError::filesystem(FsOperation::Remove, "/tmp/out/model", "denied");
        assert_eq!(
            err.to_string(),
            "Filesystem error during remove on /tmp/out/model: denied"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExportError::Configuration("x".to_string()).exit_code(), 2);
        assert_eq!(ExportError::Validation("x".to_string()).exit_code(), 2);
        assert_eq!(ExportError::export_failure("m", "boom").exit_code(), 1);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ExportError = toml_err.into();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_export_error_implements_std_error() {
        let err = ExportError::Verification("digest mismatch".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
