//! Tokenizer implementations for query analysis.
//!
//! A tokenizer turns the raw query into the ordered list of tokens that the
//! classifier scores one by one.
//!
//! # Available Tokenizers
//!
//! - [`space::SpaceTokenizer`] - Splits on every single space character
//!
//! # Examples
//!
//! ```
//! use lexitag::analysis::tokenizer::Tokenizer;
//! use lexitag::analysis::tokenizer::space::SpaceTokenizer;
//!
//! let tokenizer = SpaceTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello world").unwrap();
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! ```

use crate::error::Result;

/// Trait for tokenizers that convert a query into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared behind an `Arc`.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use lexitag::analysis::tokenizer::Tokenizer;
/// use lexitag::error::Result;
///
/// struct CommaTokenizer;
///
/// impl Tokenizer for CommaTokenizer {
///     fn tokenize(&self, text: &str) -> Result<Vec<String>> {
///         Ok(text.split(',').map(|s| s.trim().to_string()).collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "comma"
///     }
/// }
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text, preserving order.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod space;
