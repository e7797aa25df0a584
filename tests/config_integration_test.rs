//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interfering with each other.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use yolo_export::config::load_config;
use yolo_export::domain::ExportError;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("YOLO_EXPORT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("YOLO_EXPORT_EXPORT_MODEL");
    std::env::remove_var("YOLO_EXPORT_EXPORT_FORMAT");
    std::env::remove_var("YOLO_EXPORT_FRAMEWORK_TIMEOUT_SECONDS");
    std::env::remove_var("YOLO_EXPORT_APPLICATION_DRY_RUN");
    std::env::remove_var("YOLO_EXPORT_FRAMEWORK_WEIGHTS_EXTENSION");
    std::env::remove_var("YOLO_EXPORT_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_YOLO_VENV");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[export]
model = "yolo11n"
output = "web/public/model"
format = "saved_model"
verify_checksums = true

[framework]
python = "/opt/venv/bin/python"
yolo = "/opt/venv/bin/yolo"
working_dir = "/tmp/exports"
timeout_seconds = 600

[logging]
local_enabled = true
local_path = "/tmp/yolo-export-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.export.model, "yolo11n");
    assert_eq!(config.export.output, PathBuf::from("web/public/model"));
    assert_eq!(config.export.format, "saved_model");
    assert!(config.export.verify_checksums);
    assert_eq!(config.framework.python, "/opt/venv/bin/python");
    assert_eq!(config.framework.timeout_seconds, 600);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_partial_config_fills_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[export]\nmodel = \"yolo26n\"\n");

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.export.model, "yolo26n");
    assert_eq!(config.export.format, "tfjs");
    assert_eq!(
        config.export.output,
        PathBuf::from("../resources/public/model")
    );
    assert_eq!(config.framework.yolo, "yolo");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_YOLO_VENV", "/srv/venv");

    let temp_file = write_config(
        r#"
[framework]
python = "${TEST_YOLO_VENV}/bin/python"
yolo = "${TEST_YOLO_VENV}/bin/yolo"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.framework.python, "/srv/venv/bin/python");
    assert_eq!(config.framework.yolo, "/srv/venv/bin/yolo");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[framework]\npython = \"${TEST_YOLO_VENV}/bin/python\"\n");

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_YOLO_VENV"));
}

#[test]
fn test_env_overrides_win_over_file() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("YOLO_EXPORT_EXPORT_MODEL", "yolov8n");
    std::env::set_var("YOLO_EXPORT_APPLICATION_DRY_RUN", "true");

    let temp_file = write_config("[export]\nmodel = \"yolo26s\"\n");

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.export.model, "yolov8n");
    assert!(config.application.dry_run);

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_cover_extension_and_rotation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("YOLO_EXPORT_FRAMEWORK_WEIGHTS_EXTENSION", ".pth");
    std::env::set_var("YOLO_EXPORT_LOGGING_LOCAL_ROTATION", "hourly");

    let temp_file = write_config("[logging]\nlocal_rotation = \"daily\"\n");

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.framework.weights_extension, ".pth");
    assert_eq!(config.logging.local_rotation, "hourly");

    std::env::set_var("YOLO_EXPORT_LOGGING_LOCAL_ROTATION", "weekly");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("local_rotation"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("YOLO_EXPORT_FRAMEWORK_TIMEOUT_SECONDS", "soon");

    let temp_file = write_config("");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, ExportError::Configuration(_)));

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"chatty\"\n");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration validation failed"));

    let temp_file = write_config("[export]\nmodel = \"weights/yolo26s.pt\"\n");
    assert!(load_config(temp_file.path()).is_err());
}

#[test]
fn test_malformed_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[export\nmodel = ");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}
