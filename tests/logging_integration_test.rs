//! Integration tests for logging functionality
//!
//! The global subscriber can only be installed once per process, so a
//! single test performs the real initialization.

use tempfile::TempDir;
use yolo_export::config::LoggingConfig;
use yolo_export::logging::init_logging;
use yolo_export::{log_step_complete, log_step_start};

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_level_is_rejected() {
    let result = init_logging("shouty", &LoggingConfig::default());
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Invalid log level"));
    }
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs/nested");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };
    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    log_step_start!("export", "yolo26s");
    log_step_complete!("export", "yolo26s", std::time::Duration::from_millis(1200));
    drop(guard);

    assert!(log_path.is_dir());
    assert!(log_path.join("yolo-export.log").exists());
}
