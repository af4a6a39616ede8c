//! Analysis engine
//!
//! Orchestrates the entity-merge-and-validate pipeline:
//!
//! 1. pattern-catalog scan over the raw text
//! 2. false-positive filter + structural validators on catalog matches
//! 3. one recognizer query per input text
//! 4. span reconciliation (longest-span-wins)
//! 5. contextual-signal check
//! 6. aggregation into a [`Classification`]
//!
//! The engine owns no global state: the recognizer and the context
//! matcher are injected at construction, shared behind `Arc`, and every
//! classification call is an independent pure function of its input.
//! Calls may run fully in parallel once the engine exists.
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use vigia::adapters::recognizer::lexicon::LexiconRecognizer;
//! use vigia::analysis::AnalysisEngine;
//! use vigia::config::VigiaConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = VigiaConfig::default();
//! let engine = AnalysisEngine::new(&config, Arc::new(LexiconRecognizer::new()))?;
//!
//! let result = engine.analyze("Meu CPF é 123.456.789-09").await?;
//! assert!(result.contains_personal_data);
//! # Ok(())
//! # }
//! ```

use crate::adapters::recognizer::EntityRecognizer;
use crate::analysis::{
    audit::AuditLogger,
    catalog::PatternCatalog,
    classifier::Classifier,
    context::{ContextMatcher, DeclarativeContextMatcher},
    filter::{self, FalsePositiveFilter},
    reconciler, validators,
};
use crate::config::{AnalysisSettings, VigiaConfig};
use crate::domain::{Classification, EntityCategory, EntitySpan, Result, SpanOrigin, VigiaError};
use anyhow::Context;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Classification engine for Portuguese administrative text
///
/// # Thread Safety
///
/// The engine is `Send + Sync` and can be shared across async tasks with
/// `Arc`. All catalog, validator and filter data is read-only after
/// construction; no locking happens on the hot path.
pub struct AnalysisEngine {
    settings: AnalysisSettings,
    catalog: PatternCatalog,
    filter: FalsePositiveFilter,
    classifier: Classifier,
    recognizer: Arc<dyn EntityRecognizer>,
    context_matcher: Arc<dyn ContextMatcher>,
    audit_logger: Option<AuditLogger>,
}

impl AnalysisEngine {
    /// Create a new engine with the recognizer injected by the caller
    ///
    /// The recognizer handle is created once at startup and threaded
    /// through here; the engine never lazily initializes collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern catalog cannot be loaded or the
    /// audit logger cannot be created.
    pub fn new(
        config: &VigiaConfig,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> anyhow::Result<Self> {
        let catalog = match config.analysis.pattern_catalog {
            Some(ref path) => PatternCatalog::from_file(path)
                .with_context(|| format!("Failed to load pattern catalog: {}", path.display()))?,
            None => PatternCatalog::default_catalog()?,
        };

        let filter = FalsePositiveFilter::new(
            config.analysis.year_min,
            config.analysis.year_max,
            config.analysis.min_digits,
        );

        let context_matcher: Arc<dyn ContextMatcher> =
            Arc::new(DeclarativeContextMatcher::new(config.analysis.context_window));

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            settings: config.analysis.clone(),
            catalog,
            filter,
            classifier: Classifier::new(),
            recognizer,
            context_matcher,
            audit_logger,
        })
    }

    /// Replace the context matcher (test seam for collaborator faults)
    pub fn with_context_matcher(mut self, matcher: Arc<dyn ContextMatcher>) -> Self {
        self.context_matcher = matcher;
        self
    }

    /// Classify one document
    ///
    /// Empty or entity-free text is valid input and yields the all-empty
    /// zero-confidence verdict. The call either returns a complete result
    /// or fails atomically; there are no retries and no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`VigiaError::AnalysisUnavailable`] when the recognizer
    /// cannot be queried, and [`VigiaError::Audit`] when a configured
    /// audit entry cannot be written.
    pub async fn analyze(&self, text: &str) -> Result<Classification> {
        let started = Instant::now();
        let analysis_id = Uuid::new_v4();

        let pattern_spans = self.accepted_pattern_spans(text);
        let recognizer_spans = self.recognized_spans(text).await?;

        let reconciled = reconciler::reconcile(pattern_spans, recognizer_spans);
        let contextual = self.context_matcher.matches(text, &reconciled);

        let result = self.classifier.classify(text, &reconciled, contextual);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        if let Some(ref logger) = self.audit_logger {
            logger
                .log_classification(analysis_id, &result, elapsed_ms)
                .map_err(|e| VigiaError::Audit(e.to_string()))?;
        }

        tracing::debug!(
            %analysis_id,
            entities = reconciled.len(),
            contextual,
            confidence = result.confidence,
            elapsed_ms,
            "classification complete"
        );

        Ok(result)
    }

    /// Classify many documents with bounded concurrency
    ///
    /// Results keep input order. Each element fails or succeeds
    /// independently, so one unavailable recognizer call doesn't poison
    /// the rest of the batch.
    pub async fn analyze_batch(&self, texts: &[String]) -> Vec<Result<Classification>> {
        stream::iter(texts)
            .map(|text| self.analyze(text))
            .buffered(self.settings.batch_concurrency)
            .collect()
            .await
    }

    /// Scan the catalog and keep only matches that survive the span
    /// invariant, the false-positive heuristics and the validators.
    fn accepted_pattern_spans(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();

        for m in self.catalog.scan(text) {
            let span = EntitySpan::new(m.start, m.end, m.rule.category, SpanOrigin::PatternRule);
            if !span.is_within(text) {
                tracing::debug!(start = m.start, end = m.end, "dropped invalid catalog span");
                continue;
            }

            let matched_text = span.text(text);

            if m.rule.false_positive_check {
                let preceding = filter::preceding_token(text, span.start);
                if self
                    .filter
                    .is_false_positive(matched_text, preceding, m.rule.min_digits)
                {
                    continue;
                }
            }

            if let Some(kind) = m.rule.validator {
                let range = (
                    self.settings.birth_year_min,
                    self.settings.birth_year_max,
                );
                if !validators::validate(kind, matched_text, range) {
                    tracing::debug!(
                        category = m.rule.category.label(),
                        "match rejected by validator"
                    );
                    continue;
                }
            }

            spans.push(span);
        }

        spans
    }

    /// Query the recognizer once and map its output into entity spans,
    /// dropping unknown labels and invalid offsets.
    async fn recognized_spans(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let entities = self.recognizer.recognize(text).await?;

        let mut spans = Vec::new();
        for entity in entities {
            let category = match EntityCategory::parse_label(&entity.label) {
                Some(c) => c,
                None => {
                    tracing::debug!(label = %entity.label, "unknown recognizer label skipped");
                    continue;
                }
            };

            let span = EntitySpan::new(entity.start, entity.end, category, SpanOrigin::Recognizer);
            if !span.is_within(text) {
                tracing::debug!(
                    start = entity.start,
                    end = entity.end,
                    "dropped invalid recognizer span"
                );
                continue;
            }
            spans.push(span);
        }

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::recognizer::lexicon::LexiconRecognizer;
    use crate::adapters::recognizer::{EntityRecognizer, RecognizedEntity};
    use crate::domain::RecognizerError;
    use async_trait::async_trait;

    fn lexicon_engine() -> AnalysisEngine {
        let config = VigiaConfig::default();
        AnalysisEngine::new(&config, Arc::new(LexiconRecognizer::new())).unwrap()
    }

    /// Recognizer stub with canned spans
    struct StubRecognizer(Vec<RecognizedEntity>);

    #[async_trait]
    impl EntityRecognizer for StubRecognizer {
        async fn recognize(
            &self,
            _text: &str,
        ) -> std::result::Result<Vec<RecognizedEntity>, RecognizerError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Recognizer stub that always fails
    struct BrokenRecognizer;

    #[async_trait]
    impl EntityRecognizer for BrokenRecognizer {
        async fn recognize(
            &self,
            _text: &str,
        ) -> std::result::Result<Vec<RecognizedEntity>, RecognizerError> {
            Err(RecognizerError::ConnectionFailed("model offline".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[tokio::test]
    async fn test_empty_text_is_valid() {
        let engine = lexicon_engine();
        let result = engine.analyze("").await.unwrap();
        assert!(!result.contains_personal_data);
        assert!(!result.contains_sensitive_data);
        assert_eq!(result.confidence, 0.0);
    }

    #[tokio::test]
    async fn test_recognizer_failure_is_atomic() {
        let config = VigiaConfig::default();
        let engine = AnalysisEngine::new(&config, Arc::new(BrokenRecognizer)).unwrap();
        let err = engine.analyze("Meu CPF é 123.456.789-09").await.unwrap_err();
        assert!(matches!(err, VigiaError::AnalysisUnavailable(_)));
    }

    #[tokio::test]
    async fn test_invalid_recognizer_offsets_dropped() {
        let config = VigiaConfig::default();
        // end beyond text, zero-length span, and a mid-char offset
        let stub = StubRecognizer(vec![
            RecognizedEntity { start: 0, end: 999, label: "PER".into() },
            RecognizedEntity { start: 3, end: 3, label: "PER".into() },
            RecognizedEntity { start: 1, end: 2, label: "PER".into() },
        ]);
        let engine = AnalysisEngine::new(&config, Arc::new(stub)).unwrap();
        // "ã" occupies bytes 0..2, so offset 1 splits it
        let result = engine.analyze("ão paulo").await.unwrap();
        assert!(!result.contains_personal_data);
    }

    #[tokio::test]
    async fn test_unknown_labels_skipped() {
        let config = VigiaConfig::default();
        let stub = StubRecognizer(vec![RecognizedEntity {
            start: 0,
            end: 4,
            label: "GPE".into(),
        }]);
        let engine = AnalysisEngine::new(&config, Arc::new(stub)).unwrap();
        let result = engine.analyze("Gama norte").await.unwrap();
        assert!(!result.contains_personal_data);
    }

    #[tokio::test]
    async fn test_validated_cpf_detected() {
        let engine = lexicon_engine();
        let result = engine.analyze("Meu CPF é 123.456.789-09").await.unwrap();
        assert!(result.contains_personal_data);
        assert!(result.detected_types.contains("cpf"));
        assert_eq!(result.confidence, 0.95);
    }

    #[tokio::test]
    async fn test_invalid_cpf_checksum_rejected() {
        let engine = lexicon_engine();
        let result = engine.analyze("Meu CPF é 123.456.789-00").await.unwrap();
        assert!(!result.detected_types.contains("cpf"));
    }

    #[tokio::test]
    async fn test_idempotence() {
        let engine = lexicon_engine();
        let text = "João da Silva, CPF 123.456.789-09, tenho depressão";
        let first = engine.analyze(text).await.unwrap();
        let second = engine.analyze(text).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_batch_preserves_order_and_isolation() {
        let engine = lexicon_engine();
        let texts = vec![
            "Meu CPF é 123.456.789-09".to_string(),
            "Lei nº 1234/2023".to_string(),
        ];
        let results = engine.analyze_batch(&texts).await;
        assert_eq!(results.len(), 2);
        assert!(results[0].as_ref().unwrap().contains_personal_data);
        assert!(!results[1].as_ref().unwrap().contains_personal_data);
    }
}
