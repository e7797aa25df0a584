//! Export summary and reporting

use crate::domain::{ExportFormat, ExportResult, ModelId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Summary of a finished export, as printed and logged
#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    /// Model that was exported
    pub model: ModelId,

    /// Format it was exported to
    pub format: ExportFormat,

    /// Where it ended up and how large it is
    #[serde(flatten)]
    pub result: ExportResult,

    /// Wall-clock duration of the whole run
    #[serde(rename = "duration_ms", serialize_with = "serialize_duration_ms")]
    pub duration: Duration,

    /// Completion time
    pub exported_at: DateTime<Utc>,
}

impl ExportSummary {
    /// Create a summary stamped with the current time
    pub fn new(model: ModelId, format: ExportFormat, result: ExportResult) -> Self {
        Self {
            model,
            format,
            result,
            duration: Duration::from_secs(0),
            exported_at: Utc::now(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Human-readable report lines
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("Model exported to {}", self.result.final_directory.display()),
            format!("Total size: {}", format_size(self.result.total_bytes)),
            format!("Files: {}", self.result.file_count),
            format!("Duration: {:.2}s", self.duration.as_secs_f64()),
        ]
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            model = %self.model,
            format = %self.format,
            output = %self.result.final_directory.display(),
            total_bytes = self.result.total_bytes,
            file_count = self.result.file_count,
            relocation = ?self.result.relocation,
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );
    }
}

/// Format a byte count in mebibytes with one decimal, e.g. `12.3 MB`
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
}

fn serialize_duration_ms<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Relocation;
    use std::path::PathBuf;
    use test_case::test_case;

    fn summary() -> ExportSummary {
        ExportSummary::new(
            ModelId::new("yolo26s").unwrap(),
            ExportFormat::Tfjs,
            ExportResult {
                final_directory: PathBuf::from("./out/model"),
                total_bytes: 150,
                file_count: 2,
                relocation: Relocation::Renamed,
                digest: None,
            },
        )
        .with_duration(Duration::from_millis(2500))
    }

    #[test_case(0, "0.0 MB")]
    #[test_case(150, "0.0 MB")]
    #[test_case(1024 * 1024, "1.0 MB")]
    #[test_case(12_900_000, "12.3 MB")]
    fn test_format_size(bytes: u64, expected: &str) {
        assert_eq!(format_size(bytes), expected);
    }

    #[test]
    fn test_describe() {
        let lines = summary().describe();
        assert_eq!(lines[0], "Model exported to ./out/model");
        assert_eq!(lines[1], "Total size: 0.0 MB");
        assert_eq!(lines[2], "Files: 2");
        assert_eq!(lines[3], "Duration: 2.50s");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["model"], "yolo26s");
        assert_eq!(json["format"], "tfjs");
        assert_eq!(json["final_directory"], "./out/model");
        assert_eq!(json["total_bytes"], 150);
        assert_eq!(json["duration_ms"], 2500);
        assert!(json["exported_at"].is_string());
    }
}
