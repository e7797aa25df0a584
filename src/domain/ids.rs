//! Model identifier newtype with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a pretrained model, e.g. `yolo26s` or `yolov8n-seg`
///
/// The identifier doubles as the stem of the weights file (`<id>.pt`) and
/// of the directory the framework writes (`<id>_web_model`), so it must be
/// a plain file-name stem.
///
/// # Examples
///
/// ```
/// use yolo_export::domain::ids::ModelId;
/// use std::str::FromStr;
///
/// let model = ModelId::from_str("yolo26s").unwrap();
/// assert_eq!(model.as_str(), "yolo26s");
/// assert!(ModelId::from_str("../weights/yolo26s").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Creates a new ModelId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ModelId)` if the identifier is a valid file-name stem, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Model identifier cannot be empty".to_string());
        }
        if trimmed != id {
            return Err(format!(
                "Model identifier '{id}' must not have leading or trailing whitespace"
            ));
        }
        if id == "." || id == ".." || id.starts_with('.') {
            return Err(format!("Model identifier '{id}' must not start with '.'"));
        }
        if let Some(c) = id
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err(format!(
                "Invalid character '{c}' in model identifier '{id}'. Use a bare model name such as 'yolo26s'"
            ));
        }
        if id.to_ascii_lowercase().ends_with(".pt") {
            return Err(format!(
                "Model identifier '{id}' should not include the weights extension"
            ));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ModelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ModelId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}
