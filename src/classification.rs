//! Fuzzy token classification.
//!
//! Labels are registered with a list of sample words. Analyzing a query
//! splits it into tokens and files every token under each label whose best
//! matching sample rates at or above the acceptable threshold.
//!
//! # Architecture
//!
//! - [`ClassificationRegistry`]: ordered label → samples mapping
//! - [`classify_tokens`]: the scoring loop, a pure function over a registry
//! - [`QueryClassifier`]: owns configuration, registry and scorer
//! - [`AnalysisResult`]: the structured output of one analysis
//!
//! # Example
//!
//! ```
//! use lexitag::classification::{ClassifierConfig, QueryClassifier};
//!
//! # fn main() -> lexitag::error::Result<()> {
//! let mut classifier = QueryClassifier::new(ClassifierConfig::default());
//! classifier
//!     .register("fruit", ["apple", "banana", "orange"])?
//!     .register("veg", ["carrot", "potato"])?;
//!
//! let result = classifier.analyze("I like aple and carot")?;
//! assert_eq!(result.tokens_for("fruit"), Some(&["aple".to_string()][..]));
//! assert_eq!(result.tokens_for("veg"), Some(&["carot".to_string()][..]));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod engine;
mod loader;
mod registry;
mod result;

// Public exports
pub use classifier::QueryClassifier;
pub use config::{ClassifierConfig, DEFAULT_ACCEPTABLE_THRESHOLD};
pub use engine::classify_tokens;
pub use loader::{load_classifications, parse_classifications};
pub use registry::{Classification, ClassificationRegistry};
pub use result::{AnalysisResult, ClassificationResults, LabelMatches};
