//! Output of a query analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tokens classified under one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelMatches {
    /// Label name.
    pub label: String,
    /// Matching tokens in query order. Repeated tokens appear once per occurrence.
    pub tokens: Vec<String>,
}

/// Label → matched tokens, ordered by each label's first match.
///
/// Only labels with at least one matching token are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResults {
    entries: Vec<LabelMatches>,
}

impl ClassificationResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `token` under `label`, creating the label entry on first use.
    pub(crate) fn push(&mut self, label: &str, token: &str) {
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.tokens.push(token.to_string()),
            None => self.entries.push(LabelMatches {
                label: label.to_string(),
                tokens: vec![token.to_string()],
            }),
        }
    }

    /// Tokens matched under `label`.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.tokens.as_slice())
    }

    /// Check whether `label` matched anything.
    pub fn contains_label(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Matched labels in first-match order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Iterate over matched labels and their tokens.
    pub fn iter(&self) -> impl Iterator<Item = &LabelMatches> {
        self.entries.iter()
    }

    /// Number of labels with at least one match.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of analyzing one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// When the analysis started.
    pub timestamp: DateTime<Utc>,
    /// The analyzed query. Left empty when no label was registered.
    pub query: String,
    /// The query split on single spaces. Left empty when no label was registered.
    pub tokens: Vec<String>,
    /// Classified tokens per label.
    pub results: ClassificationResults,
}

impl AnalysisResult {
    /// Create an empty result stamped with the current time.
    pub fn new() -> Self {
        AnalysisResult {
            timestamp: Utc::now(),
            query: String::new(),
            tokens: Vec::new(),
            results: ClassificationResults::new(),
        }
    }

    /// Tokens classified under `label`.
    pub fn tokens_for(&self, label: &str) -> Option<&[String]> {
        self.results.get(label)
    }

    /// Labels that matched at least one token.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.results.labels()
    }

    /// Check whether any token was classified.
    pub fn is_classified(&self) -> bool {
        !self.results.is_empty()
    }

    /// Serialize the result to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult::new();
        assert_eq!(result.query, "");
        assert!(result.tokens.is_empty());
        assert!(!result.is_classified());
        assert_eq!(result.tokens_for("fruit"), None);
    }

    #[test]
    fn test_push_keeps_first_match_order_and_duplicates() {
        let mut results = ClassificationResults::new();
        results.push("veg", "carot");
        results.push("fruit", "aple");
        results.push("veg", "carot");

        assert_eq!(results.labels().collect::<Vec<_>>(), vec!["veg", "fruit"]);
        assert_eq!(
            results.get("veg"),
            Some(&["carot".to_string(), "carot".to_string()][..])
        );
        assert!(results.contains_label("fruit"));
        assert!(!results.contains_label("meat"));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_to_json() {
        let mut result = AnalysisResult::new();
        result.query = "aple".to_string();
        result.tokens = vec!["aple".to_string()];
        result.results.push("fruit", "aple");

        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["query"], "aple");
        assert_eq!(json["results"][0]["label"], "fruit");
        assert_eq!(json["results"][0]["tokens"][0], "aple");
        assert!(json["timestamp"].is_string());
    }
}
