//! Export formats understood by the framework's exporter
//!
//! Only formats whose artifact is a directory are supported; the relocation
//! step moves a directory tree, never a single file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ModelId;

/// Target serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// TensorFlow.js graph model for browser inference
    #[default]
    Tfjs,
    /// TensorFlow SavedModel
    SavedModel,
    /// OpenVINO IR
    #[serde(rename = "openvino")]
    OpenVino,
    /// NCNN param/bin pair
    Ncnn,
    /// PaddlePaddle inference model
    Paddle,
}

impl ExportFormat {
    /// All supported formats, in display order
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Tfjs,
        ExportFormat::SavedModel,
        ExportFormat::OpenVino,
        ExportFormat::Ncnn,
        ExportFormat::Paddle,
    ];

    /// Name passed to the framework as `format=<name>`
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Tfjs => "tfjs",
            ExportFormat::SavedModel => "saved_model",
            ExportFormat::OpenVino => "openvino",
            ExportFormat::Ncnn => "ncnn",
            ExportFormat::Paddle => "paddle",
        }
    }

    /// Suffix the framework appends to the model name for the output directory
    pub fn directory_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Tfjs => "_web_model",
            ExportFormat::SavedModel => "_saved_model",
            ExportFormat::OpenVino => "_openvino_model",
            ExportFormat::Ncnn => "_ncnn_model",
            ExportFormat::Paddle => "_paddle_model",
        }
    }

    /// Directory name the framework produces for `model`
    ///
    /// ```
    /// use yolo_export::domain::{ExportFormat, ModelId};
    ///
    /// let model = ModelId::new("yolo26s").unwrap();
    /// assert_eq!(ExportFormat::Tfjs.produced_dir_name(&model), "yolo26s_web_model");
    /// ```
    pub fn produced_dir_name(&self, model: &ModelId) -> String {
        format!("{}{}", model.as_str(), self.directory_suffix())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tfjs" | "web" => Ok(ExportFormat::Tfjs),
            "saved_model" | "savedmodel" => Ok(ExportFormat::SavedModel),
            "openvino" => Ok(ExportFormat::OpenVino),
            "ncnn" => Ok(ExportFormat::Ncnn),
            "paddle" => Ok(ExportFormat::Paddle),
            other => Err(format!(
                "Unsupported export format '{other}'. Must be one of: {}",
                ExportFormat::ALL
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
