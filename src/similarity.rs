//! String similarity scoring.
//!
//! The classifier never compares strings itself; it asks a
//! [`SimilarityScorer`] for the best matching sample of a label and the
//! rating of that match. Ratings are normalized to `[0.0, 1.0]` where `1.0`
//! means an exact match.
//!
//! # Available Scorers
//!
//! - [`dice::DiceCoefficient`] - Character bigram overlap (the default)
//! - [`levenshtein::NormalizedLevenshtein`] - Edit distance scaled by length
//!
//! # Examples
//!
//! ```
//! use lexitag::similarity::SimilarityScorer;
//! use lexitag::similarity::dice::DiceCoefficient;
//!
//! let scorer = DiceCoefficient::new();
//! let references = vec!["apple".to_string(), "banana".to_string()];
//! let best = scorer.best_match("aple", &references).unwrap().unwrap();
//!
//! assert_eq!(best.reference, "apple");
//! assert!(best.rating > 0.8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod dice;
pub mod levenshtein;

/// The best reference found for a candidate string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BestMatch {
    /// The reference string that scored highest.
    pub reference: String,
    /// Similarity rating in `[0.0, 1.0]`.
    pub rating: f64,
    /// Position of the reference in the list it was chosen from.
    pub index: usize,
}

/// Trait for similarity metrics between two strings.
///
/// Implementors only need [`rate`](SimilarityScorer::rate); the provided
/// [`best_match`](SimilarityScorer::best_match) keeps the first reference on
/// ties and returns `None` for an empty reference list.
pub trait SimilarityScorer: Send + Sync {
    /// Rate how similar `a` and `b` are, from `0.0` to `1.0`.
    fn rate(&self, a: &str, b: &str) -> Result<f64>;

    /// Find the reference most similar to `candidate`.
    fn best_match(&self, candidate: &str, references: &[String]) -> Result<Option<BestMatch>> {
        let mut best: Option<BestMatch> = None;

        for (index, reference) in references.iter().enumerate() {
            let rating = self.rate(candidate, reference)?;
            let better = match &best {
                Some(current) => rating > current.rating,
                None => true,
            };
            if better {
                best = Some(BestMatch {
                    reference: reference.clone(),
                    rating,
                    index,
                });
            }
        }

        Ok(best)
    }

    /// Get the name of this scorer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
