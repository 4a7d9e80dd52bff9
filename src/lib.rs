//! # lexitag
//!
//! A tiny fuzzy token classifier for free-text queries.
//!
//! ## Features
//!
//! - Label registration with sample words
//! - Fuzzy matching through pluggable similarity scorers
//! - Bigram Dice coefficient and normalized Levenshtein scorers
//! - Inclusive, configurable acceptance threshold
//! - Serializable analysis results

pub mod analysis;
pub mod classification;
pub mod error;
pub mod similarity;

pub mod prelude {
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::space::SpaceTokenizer;
    pub use crate::classification::{
        AnalysisResult, Classification, ClassificationRegistry, ClassifierConfig, QueryClassifier,
    };
    pub use crate::error::{LexitagError, Result};
    pub use crate::similarity::dice::DiceCoefficient;
    pub use crate::similarity::levenshtein::NormalizedLevenshtein;
    pub use crate::similarity::{BestMatch, SimilarityScorer};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
