//! Dice coefficient over character bigrams.

use ahash::AHashMap;

use super::SimilarityScorer;
use crate::error::Result;

/// Bigram based Sørensen–Dice similarity.
///
/// Whitespace is stripped from both strings first. Identical strings rate
/// `1.0`; otherwise a string with fewer than two characters rates `0.0`.
/// Bigrams are counted as a multiset, so repeated pairs only match as often
/// as they occur in both strings. Comparison is case sensitive.
#[derive(Clone, Debug, Default)]
pub struct DiceCoefficient;

impl DiceCoefficient {
    /// Create a new Dice coefficient scorer.
    pub fn new() -> Self {
        DiceCoefficient
    }
}

/// Compare two strings, returning a rating between 0.0 and 1.0.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let first: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut first_bigrams: AHashMap<(char, char), usize> = AHashMap::new();
    for pair in first.windows(2) {
        *first_bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        match first_bigrams.get_mut(&(pair[0], pair[1])) {
            Some(count) if *count > 0 => {
                *count -= 1;
                intersection += 1;
            }
            _ => {}
        }
    }

    (2.0 * intersection as f64) / (first.len() + second.len() - 2) as f64
}

impl SimilarityScorer for DiceCoefficient {
    fn rate(&self, a: &str, b: &str) -> Result<f64> {
        Ok(dice_coefficient(a, b))
    }

    fn name(&self) -> &'static str {
        "dice"
    }
}
