//! Levenshtein distance and the similarity scorer built on it.

use std::cmp::min;

use super::SimilarityScorer;
use crate::error::Result;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions, deletions, or substitutions)
/// required to change one word into another.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    // Only two rows are needed at a time
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Similarity as `1 - distance / max_len`.
///
/// Two empty strings are identical and rate `1.0`.
#[derive(Clone, Debug, Default)]
pub struct NormalizedLevenshtein;

impl NormalizedLevenshtein {
    /// Create a new normalized Levenshtein scorer.
    pub fn new() -> Self {
        NormalizedLevenshtein
    }
}

impl SimilarityScorer for NormalizedLevenshtein {
    fn rate(&self, a: &str, b: &str) -> Result<f64> {
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            return Ok(1.0);
        }

        let distance = levenshtein_distance(a, b);
        Ok(1.0 - (distance as f64 / max_len as f64))
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
