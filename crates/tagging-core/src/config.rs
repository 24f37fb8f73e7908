//! Widget configuration.

use serde::{Deserialize, Serialize};

/// Static properties of a tagging question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Image shown above the question.
    pub image: String,
    /// Question text.
    pub question: String,
    /// Where the tag dataset lives.
    pub dataset: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            image: "image".to_string(),
            question: "question".to_string(),
            dataset: "./".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a configuration from JSON, filling gaps with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
