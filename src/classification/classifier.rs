//! The query classifier.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::space::SpaceTokenizer;
use crate::classification::config::ClassifierConfig;
use crate::classification::engine::classify_tokens;
use crate::classification::registry::{Classification, ClassificationRegistry, validate_label};
use crate::classification::result::AnalysisResult;
use crate::error::{LexitagError, Result};
use crate::similarity::SimilarityScorer;
use crate::similarity::dice::DiceCoefficient;

/// Tags query tokens with the labels whose samples they resemble.
///
/// Holds the configuration, the label registry, the similarity scorer and
/// the tokenizer. Defaults to [`DiceCoefficient`] and [`SpaceTokenizer`].
pub struct QueryClassifier {
    config: ClassifierConfig,
    registry: ClassificationRegistry,
    scorer: Arc<dyn SimilarityScorer>,
    tokenizer: Arc<dyn Tokenizer>,
    active_query: String,
}

impl std::fmt::Debug for QueryClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClassifier")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("scorer", &self.scorer.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("active_query", &self.active_query)
            .finish()
    }
}

impl Default for QueryClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl QueryClassifier {
    /// Create a classifier with the default scorer.
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_scorer(config, Arc::new(DiceCoefficient::new()))
    }

    /// Create a classifier with a custom similarity scorer.
    pub fn with_scorer(config: ClassifierConfig, scorer: Arc<dyn SimilarityScorer>) -> Self {
        QueryClassifier {
            config,
            registry: ClassificationRegistry::new(),
            scorer,
            tokenizer: Arc::new(SpaceTokenizer::new()),
            active_query: String::new(),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Register `label` with its sample words, replacing earlier samples.
    ///
    /// Returns the classifier so registrations can be chained.
    pub fn register<'a, L, I, S>(&mut self, label: L, samples: I) -> Result<&mut Self>
    where
        L: Into<Option<&'a str>>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let label = label.into();
        self.registry.register(label, samples)?;

        if self.config.dev {
            // register() rejects a missing label, so this is always Some
            let label = label.unwrap_or_default();
            debug!(
                label = %label,
                samples = self.registry.get(label).map_or(0, <[String]>::len),
                "registered classification"
            );
        }

        Ok(self)
    }

    /// Register every classification in order.
    ///
    /// Every label is checked before the first one is stored, so a batch with
    /// an invalid label leaves the registry unchanged.
    pub fn register_all<I>(&mut self, classifications: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Classification>,
    {
        let classifications: Vec<Classification> = classifications.into_iter().collect();
        for classification in &classifications {
            validate_label(Some(classification.label.as_str()))?;
        }

        for classification in classifications {
            self.register(classification.label.as_str(), classification.samples)?;
        }
        Ok(self)
    }

    /// Analyze `query` against the registered labels.
    ///
    /// Fails with [`LexitagError::InvalidArgument`] when the query is missing
    /// or empty. When no label is registered the returned result keeps its
    /// `query` and `tokens` empty.
    pub fn analyze<'a, Q>(&mut self, query: Q) -> Result<AnalysisResult>
    where
        Q: Into<Option<&'a str>>,
    {
        let query = match query.into() {
            Some(query) if !query.is_empty() => query,
            _ => {
                return Err(LexitagError::invalid_argument(
                    "parameter 'query' cannot be missing or have zero length",
                ));
            }
        };

        self.active_query = query.to_string();
        if self.config.dev {
            debug!(query = %query, "added a new query");
        }

        let mut result = AnalysisResult::new();

        if !self.registry.has_any() {
            if self.config.dev {
                debug!("no registered classifications, returning the default structure");
            }
            return Ok(result);
        }

        let tokens = self.tokenizer.tokenize(query)?;
        let results = classify_tokens(&tokens, &self.registry, self.scorer.as_ref(), &self.config)?;

        result.query = query.to_string();
        result.tokens = tokens;
        result.results = results;

        Ok(result)
    }

    /// The query passed to the last [`analyze`](Self::analyze) call.
    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    /// The registered labels.
    pub fn registry(&self) -> &ClassificationRegistry {
        &self.registry
    }

    /// Current configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Replace the configuration. Registered labels are kept.
    pub fn set_config(&mut self, config: ClassifierConfig) {
        self.config = config;
    }
}
