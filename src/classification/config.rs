//! Classifier configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Minimum rating used when no threshold is configured.
pub const DEFAULT_ACCEPTABLE_THRESHOLD: f64 = 0.8;

/// Configuration for the query classifier.
///
/// Deserializes from JSON objects such as
/// `{ "dev": true, "acceptableThreshold": 0.7 }`. Missing keys fall back to
/// their defaults and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Emit diagnostic events while registering and analyzing.
    pub dev: bool,
    /// Minimum similarity rating (inclusive) for a token to be classified.
    ///
    /// Not validated: a value above 1.0 never matches, one at or below 0.0
    /// matches every token against every label with samples.
    #[serde(alias = "acceptable_threshold")]
    pub acceptable_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            dev: false,
            acceptable_threshold: DEFAULT_ACCEPTABLE_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    /// Toggle diagnostic output.
    pub fn with_dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    /// Set the acceptable threshold.
    pub fn with_acceptable_threshold(mut self, threshold: f64) -> Self {
        self.acceptable_threshold = threshold;
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
