//! Registry of labels and their sample words.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LexitagError, Result};

/// A label together with the sample words that define it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Label name.
    pub label: String,
    /// Reference words for the label.
    pub samples: Vec<String>,
}

impl Classification {
    /// Create a new classification.
    pub fn new<L, I, S>(label: L, samples: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Classification {
            label: label.into(),
            samples: samples.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping from label to samples.
///
/// Labels keep the position of their first registration. Registering a label
/// again replaces its samples in place.
#[derive(Debug, Clone, Default)]
pub struct ClassificationRegistry {
    entries: Vec<Classification>,
    positions: AHashMap<String, usize>,
}

impl ClassificationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `label → samples`, overwriting any previous samples for `label`.
    ///
    /// Fails with [`LexitagError::InvalidArgument`] when the label is missing
    /// or empty. Samples are stored as given, including an empty list.
    pub fn register<'a, L, I, S>(&mut self, label: L, samples: I) -> Result<()>
    where
        L: Into<Option<&'a str>>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = validate_label(label.into())?;
        let samples: Vec<String> = samples.into_iter().map(Into::into).collect();

        match self.positions.get(label) {
            Some(&position) => self.entries[position].samples = samples,
            None => {
                self.positions.insert(label.to_string(), self.entries.len());
                self.entries.push(Classification::new(label, samples));
            }
        }

        Ok(())
    }

    /// Get the samples registered for `label`.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.positions
            .get(label)
            .map(|&position| self.entries[position].samples.as_slice())
    }

    /// Check whether `label` is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Classifications in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Classification> {
        self.entries.iter()
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no label is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether any label is registered.
    pub fn has_any(&self) -> bool {
        !self.is_empty()
    }
}

/// Reject a missing or empty label.
pub(crate) fn validate_label(label: Option<&str>) -> Result<&str> {
    match label {
        Some(label) if !label.is_empty() => Ok(label),
        _ => Err(LexitagError::invalid_argument(
            "parameter 'label' cannot be missing or have zero length",
        )),
    }
}
