//! Configuration schema types
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working configuration equivalent to running with no flags.

use crate::domain::{ExportFormat, ModelId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration structure that maps to the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export defaults (model, destination, format)
    #[serde(default)]
    pub export: ExportConfig,

    /// External framework invocation
    #[serde(default)]
    pub framework: FrameworkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;
        self.framework.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (plan only, no framework call, no filesystem change)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Model identifier to export
    #[serde(default = "default_model")]
    pub model: String,

    /// Destination directory, relative to the invocation directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Export format
    #[serde(default = "default_format")]
    pub format: String,

    /// Compare SHA-256 tree digests before and after relocation
    #[serde(default)]
    pub verify_checksums: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            output: default_output(),
            format: default_format(),
            verify_checksums: false,
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        ModelId::from_str(&self.model).map_err(|e| format!("export.model: {e}"))?;
        ExportFormat::from_str(&self.format).map_err(|e| format!("export.format: {e}"))?;
        if self.output.as_os_str().is_empty() {
            return Err("export.output cannot be empty".to_string());
        }
        Ok(())
    }
}

/// How the external framework is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Python interpreter with the framework installed
    #[serde(default = "default_python")]
    pub python: String,

    /// Framework CLI entry point
    #[serde(default = "default_yolo")]
    pub yolo: String,

    /// Extension appended to the model identifier to name the weights file
    #[serde(default = "default_weights_extension")]
    pub weights_extension: String,

    /// Directory the framework runs in and writes its output to
    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,

    /// Upper bound for each framework call in seconds (0 = no limit)
    #[serde(default)]
    pub timeout_seconds: u64,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            yolo: default_yolo(),
            weights_extension: default_weights_extension(),
            working_dir: default_working_dir(),
            timeout_seconds: 0,
        }
    }
}

impl FrameworkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.python.trim().is_empty() {
            return Err("framework.python cannot be empty".to_string());
        }
        if self.yolo.trim().is_empty() {
            return Err("framework.yolo cannot be empty".to_string());
        }
        if !self.weights_extension.starts_with('.') || self.weights_extension.len() < 2 {
            return Err(format!(
                "framework.weights_extension '{}' must start with '.'",
                self.weights_extension
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model() -> String {
    "yolo26s".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("../resources/public/model")
}

fn default_format() -> String {
    "tfjs".to_string()
}

fn default_python() -> String {
    "python3".to_string()
}

fn default_yolo() -> String {
    "yolo".to_string()
}

fn default_weights_extension() -> String {
    ".pt".to_string()
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
