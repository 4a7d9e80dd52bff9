//! Helper functions for loading classifications.

use std::path::Path;

use crate::classification::registry::Classification;
use crate::error::Result;

/// Parse classifications from a JSON array of `{ "label", "samples" }` records.
///
/// The array order is kept so that labels register in the order they appear.
pub fn parse_classifications(json: &str) -> Result<Vec<Classification>> {
    let classifications: Vec<Classification> = serde_json::from_str(json)?;
    Ok(classifications)
}

/// Load classifications from a JSON file.
pub fn load_classifications<P: AsRef<Path>>(path: P) -> Result<Vec<Classification>> {
    let content = std::fs::read_to_string(path)?;
    parse_classifications(&content)
}
