//! Single-space tokenizer implementation.

use super::Tokenizer;

use crate::error::Result;

/// A tokenizer that splits text on each `' '` character.
///
/// Unlike a whitespace tokenizer it does not collapse runs of spaces: two
/// consecutive spaces produce an empty token, and leading or trailing spaces
/// produce empty tokens at the edges. Tabs and newlines stay inside tokens.
#[derive(Clone, Debug, Default)]
pub struct SpaceTokenizer;

impl SpaceTokenizer {
    /// Create a new space tokenizer.
    pub fn new() -> Self {
        SpaceTokenizer
    }
}

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text.split(' ').map(str::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "space"
    }
}
