//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// Configuration file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "yolo-export.toml";

/// Loads configuration from a TOML file
///
/// `${VAR}` placeholders are expanded before parsing; `YOLO_EXPORT_*`
/// variables then override individual keys and the result is validated.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, a referenced
/// variable is unset, parsing fails, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use yolo_export::config::loader::load_config;
///
/// let config = load_config("yolo-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Resolves the effective configuration for a command
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is used
/// when present in the current directory, otherwise built-in defaults.
/// Environment overrides and validation apply in every case.
pub fn resolve_config(explicit: Option<&str>) -> Result<ExporterConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => {
            tracing::debug!("No configuration file found, using built-in defaults");
            finish(ExporterConfig::default())
        }
    }
}

fn finish(mut config: ExporterConfig) -> Result<ExporterConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Replaces `${VAR}` placeholders with values from the environment
///
/// Lines starting with `#` are left as written, so the sample config can
/// document placeholders without requiring them to be set.
///
/// # Errors
///
/// Lists every unset variable referenced outside a comment
fn substitute_env_vars(input: &str) -> Result<String> {
    let placeholder = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut unset: Vec<String> = Vec::new();

    let mut output = String::with_capacity(input.len());
    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            let replaced = placeholder.replace_all(line, |caps: &Captures| {
                let name = &caps[1];
                match std::env::var(name) {
                    Ok(value) => value,
                    Err(_) => {
                        if !unset.iter().any(|known| known == name) {
                            unset.push(name.to_string());
                        }
                        caps[0].to_string()
                    }
                }
            });
            output.push_str(&replaced);
        }
        output.push('\n');
    }

    if unset.is_empty() {
        Ok(output)
    } else {
        Err(ExportError::Configuration(format!(
            "Unset environment variables referenced in configuration: {}",
            unset.join(", ")
        )))
    }
}

/// Overrides keys from `YOLO_EXPORT_<SECTION>_<KEY>` variables
///
/// Every key of every section has a variable, e.g. `YOLO_EXPORT_EXPORT_MODEL`
/// or `YOLO_EXPORT_LOGGING_LOCAL_ROTATION`.
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_APPLICATION_DRY_RUN") {
        config.application.dry_run = parse_bool("YOLO_EXPORT_APPLICATION_DRY_RUN", &val)?;
    }

    // Export overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_MODEL") {
        config.export.model = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_OUTPUT") {
        config.export.output = val.into();
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_FORMAT") {
        config.export.format = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_VERIFY_CHECKSUMS") {
        config.export.verify_checksums =
            parse_bool("YOLO_EXPORT_EXPORT_VERIFY_CHECKSUMS", &val)?;
    }

    // Framework overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_FRAMEWORK_PYTHON") {
        config.framework.python = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_FRAMEWORK_YOLO") {
        config.framework.yolo = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_FRAMEWORK_WEIGHTS_EXTENSION") {
        config.framework.weights_extension = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_FRAMEWORK_WORKING_DIR") {
        config.framework.working_dir = val.into();
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_FRAMEWORK_TIMEOUT_SECONDS") {
        config.framework.timeout_seconds = val.parse().map_err(|_| {
            ExportError::Configuration(format!(
                "YOLO_EXPORT_FRAMEWORK_TIMEOUT_SECONDS must be a number, got '{val}'"
            ))
        })?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("YOLO_EXPORT_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ExportError::Configuration(format!(
            "{name} must be a boolean, got '{value}'"
        ))),
    }
}
