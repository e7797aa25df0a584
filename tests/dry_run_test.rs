//! Integration tests for dry-run mode
//!
//! These tests verify that `--dry-run` never invokes the framework and
//! never touches the destination.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use yolo_export::cli::commands::export::ExportArgs;
use yolo_export::config::{ExporterConfig, FrameworkConfig};
use yolo_export::core::export::ExportPlan;
use yolo_export::domain::{ExportFormat, ExportRequest, ModelId};

fn config_in(dir: &TempDir) -> ExporterConfig {
    let mut config = ExporterConfig::default();
    // Nothing may run in dry-run mode, so point the framework at nothing
    config.framework = FrameworkConfig {
        python: "/nonexistent/python3".to_string(),
        yolo: "/nonexistent/yolo".to_string(),
        working_dir: dir.path().to_path_buf(),
        ..FrameworkConfig::default()
    };
    config
}

#[test]
fn test_dry_run_flag_from_config() {
    let mut config = ExporterConfig::default();
    config.application.dry_run = true;

    let resolved = ExportArgs::default().resolve(&config).unwrap();
    assert!(resolved.dry_run);
}

#[test]
fn test_dry_run_flag_from_cli() {
    let args = ExportArgs {
        dry_run: true,
        ..ExportArgs::default()
    };
    let resolved = args.resolve(&ExporterConfig::default()).unwrap();
    assert!(resolved.dry_run);
}

#[tokio::test]
async fn test_dry_run_does_not_touch_existing_output() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("public/model");
    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("model.json"), b"{\"old\":true}").unwrap();

    let args = ExportArgs {
        output: Some(output.clone()),
        dry_run: true,
        ..ExportArgs::default()
    };
    let code = args.execute(&config_in(&tmp)).await.unwrap();

    assert_eq!(code, 0);
    assert_eq!(
        fs::read_to_string(output.join("model.json")).unwrap(),
        "{\"old\":true}"
    );
}

#[tokio::test]
async fn test_dry_run_does_not_create_parents() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("a/b/model");

    let args = ExportArgs {
        output: Some(output),
        dry_run: true,
        json: true,
        ..ExportArgs::default()
    };
    let code = args.execute(&config_in(&tmp)).await.unwrap();

    assert_eq!(code, 0);
    assert!(!tmp.path().join("a").exists());
}

#[test]
fn test_plan_serializes_for_json_output() {
    let tmp = TempDir::new().unwrap();
    let framework = FrameworkConfig {
        working_dir: tmp.path().to_path_buf(),
        ..FrameworkConfig::default()
    };
    let request = ExportRequest::new(ModelId::new("yolo26s").unwrap(), PathBuf::from("out"))
        .with_format(ExportFormat::SavedModel);

    let plan = ExportPlan::new(&request, &framework);
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["model"], "yolo26s");
    assert_eq!(json["format"], "saved_model");
    assert_eq!(json["weights_file"], "yolo26s.pt");
    assert_eq!(json["replaces_existing"], false);
    assert!(json["produced_dir"]
        .as_str()
        .unwrap()
        .ends_with("yolo26s_saved_model"));
}
