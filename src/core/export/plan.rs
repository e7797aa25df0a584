//! Dry-run planning
//!
//! Describes what an export would do without calling the framework or
//! touching the filesystem beyond a read-only existence check.

use crate::adapters::framework::UltralyticsFramework;
use crate::config::FrameworkConfig;
use crate::domain::{ExportFormat, ExportRequest, ModelId};
use serde::Serialize;
use std::path::PathBuf;

/// What an export run would do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    pub model: ModelId,
    pub format: ExportFormat,
    pub weights_file: String,
    pub produced_dir: PathBuf,
    pub output_dir: PathBuf,
    pub replaces_existing: bool,
}

impl ExportPlan {
    /// Build the plan for `request` against the configured framework
    pub fn new(request: &ExportRequest, framework: &FrameworkConfig) -> Self {
        let driver = UltralyticsFramework::new(framework.clone());
        Self {
            model: request.model().clone(),
            format: request.format(),
            weights_file: driver.weights_file(request.model()),
            produced_dir: driver.produced_dir(request.model(), request.format()),
            output_dir: request.output_dir().to_path_buf(),
            replaces_existing: request.output_dir().symlink_metadata().is_ok(),
        }
    }

    /// Human-readable plan lines
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("Model: {} ({})", self.model, self.weights_file),
            format!("Format: {}", self.format),
            format!("Framework output: {}", self.produced_dir.display()),
            format!(
                "Destination: {}{}",
                self.output_dir.display(),
                if self.replaces_existing {
                    " (existing content will be replaced)"
                } else {
                    ""
                }
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plan_for_fresh_destination() {
        let tmp = TempDir::new().unwrap();
        let framework = FrameworkConfig {
            working_dir: tmp.path().to_path_buf(),
            ..FrameworkConfig::default()
        };
        let request = ExportRequest::new(ModelId::new("yolo26s").unwrap(), tmp.path().join("out"));

        let plan = ExportPlan::new(&request, &framework);
        assert_eq!(plan.weights_file, "yolo26s.pt");
        assert_eq!(plan.produced_dir, tmp.path().join("yolo26s_web_model"));
        assert!(!plan.replaces_existing);
        assert_eq!(plan.describe().len(), 4);
    }

    #[test]
    fn test_plan_flags_replacement() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("model");
        std::fs::create_dir(&output).unwrap();
        let request = ExportRequest::new(ModelId::new("yolo26n").unwrap(), &output);

        let plan = ExportPlan::new(&request, &FrameworkConfig::default());
        assert!(plan.replaces_existing);
        assert!(plan.describe()[3].contains("will be replaced"));
    }
}
