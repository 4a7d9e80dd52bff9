//! The token × label scoring loop.

use tracing::debug;

use crate::classification::config::ClassifierConfig;
use crate::classification::registry::ClassificationRegistry;
use crate::classification::result::ClassificationResults;
use crate::error::Result;
use crate::similarity::SimilarityScorer;

/// Classify `tokens` against every label in `registry`.
///
/// Tokens are visited in order and, for each token, labels in registration
/// order. A token is recorded under a label when the best rating among that
/// label's samples is at least `config.acceptable_threshold`. Labels without
/// samples never match. The first scorer error aborts the loop and is
/// returned as is.
pub fn classify_tokens(
    tokens: &[String],
    registry: &ClassificationRegistry,
    scorer: &dyn SimilarityScorer,
    config: &ClassifierConfig,
) -> Result<ClassificationResults> {
    let mut results = ClassificationResults::new();

    for token in tokens {
        for classification in registry.iter() {
            let Some(best) = scorer.best_match(token, &classification.samples)? else {
                continue;
            };

            if best.rating >= config.acceptable_threshold {
                if config.dev {
                    debug!(
                        token = %token,
                        label = %classification.label,
                        sample = %best.reference,
                        confidence = best.rating * 100.0,
                        "classified token"
                    );
                }
                results.push(&classification.label, token);
            }
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexitagError;
    use crate::similarity::dice::DiceCoefficient;

    /// Returns a fixed rating for every pair.
    struct FixedScorer(f64);

    impl SimilarityScorer for FixedScorer {
        fn rate(&self, _a: &str, _b: &str) -> Result<f64> {
            Ok(self.0)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Fails once it sees the given token.
    struct FailOn(&'static str);

    impl SimilarityScorer for FailOn {
        fn rate(&self, a: &str, b: &str) -> Result<f64> {
            if a == self.0 {
                return Err(LexitagError::similarity(format!("cannot rate '{a}'")));
            }
            Ok(if a == b { 1.0 } else { 0.0 })
        }

        fn name(&self) -> &'static str {
            "fail-on"
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn produce_registry() -> ClassificationRegistry {
        let mut registry = ClassificationRegistry::new();
        registry
            .register("fruit", ["apple", "banana", "orange"])
            .unwrap();
        registry.register("veg", ["carrot", "potato"]).unwrap();
        registry
    }

    #[test]
    fn test_classify_misspellings() {
        let registry = produce_registry();
        let results = classify_tokens(
            &tokens(&["I", "like", "aple", "and", "carot"]),
            &registry,
            &DiceCoefficient::new(),
            &ClassifierConfig::default(),
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results.get("fruit"), Some(&["aple".to_string()][..]));
        assert_eq!(results.get("veg"), Some(&["carot".to_string()][..]));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let registry = produce_registry();

        let at = ClassifierConfig::default().with_acceptable_threshold(0.5);
        let results = classify_tokens(&tokens(&["x"]), &registry, &FixedScorer(0.5), &at).unwrap();
        assert_eq!(results.labels().collect::<Vec<_>>(), vec!["fruit", "veg"]);

        let above = ClassifierConfig::default().with_acceptable_threshold(0.5000001);
        let results =
            classify_tokens(&tokens(&["x"]), &registry, &FixedScorer(0.5), &above).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_out_of_range_thresholds() {
        let registry = produce_registry();

        let never = ClassifierConfig::default().with_acceptable_threshold(1.01);
        let results =
            classify_tokens(&tokens(&["apple"]), &registry, &DiceCoefficient::new(), &never)
                .unwrap();
        assert!(results.is_empty());

        let always = ClassifierConfig::default().with_acceptable_threshold(0.0);
        let results = classify_tokens(
            &tokens(&["zzz", ""]),
            &registry,
            &DiceCoefficient::new(),
            &always,
        )
        .unwrap();
        assert_eq!(
            results.get("fruit"),
            Some(&["zzz".to_string(), String::new()][..])
        );
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_empty_samples_never_match() {
        let mut registry = ClassificationRegistry::new();
        registry.register("empty", Vec::<String>::new()).unwrap();

        let config = ClassifierConfig::default().with_acceptable_threshold(0.0);
        let results =
            classify_tokens(&tokens(&["anything"]), &registry, &FixedScorer(1.0), &config)
                .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_token_under_multiple_labels() {
        let mut registry = ClassificationRegistry::new();
        registry.register("fruit", ["orange"]).unwrap();
        registry.register("color", ["orange", "red"]).unwrap();

        let results = classify_tokens(
            &tokens(&["orange", "orange"]),
            &registry,
            &DiceCoefficient::new(),
            &ClassifierConfig::default(),
        )
        .unwrap();

        let orange = Some(&["orange".to_string(), "orange".to_string()][..]);
        assert_eq!(results.get("fruit"), orange);
        assert_eq!(results.get("color"), orange);
    }

    #[test]
    fn test_scorer_error_propagates() {
        let registry = produce_registry();
        let err = classify_tokens(
            &tokens(&["apple", "boom"]),
            &registry,
            &FailOn("boom"),
            &ClassifierConfig::default(),
        )
        .unwrap_err();

        match err {
            LexitagError::Similarity(msg) => assert_eq!(msg, "cannot rate 'boom'"),
            other => panic!("Expected similarity error, got {other:?}"),
        }
    }
}
