use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Options of one `animate` call.
///
/// Deserializes from a partial mapping: every absent key keeps its default,
/// so `{ timeout_ms: 300 }` still strips the class on completion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Remove the trigger class on the frame after the attempt settles.
    pub remove_class_on_end: bool,
    /// Maximum wait for the completion event.
    #[serde(rename = "timeout_ms", deserialize_with = "millis")]
    pub timeout: Duration,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            remove_class_on_end: true,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl AnimationOptions {
    #[must_use]
    pub fn with_remove_class_on_end(mut self, remove: bool) -> Self {
        self.remove_class_on_end = remove;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

fn millis<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_millis)
}
