//! Classifier/aggregator
//!
//! Walks the reconciled entity set plus the contextual signal and folds
//! everything into one [`Classification`]: category sets, provenance,
//! confidence and evidence. Confidence floors are fixed per bucket; the
//! final confidence is the maximum floor raised during the walk.

use crate::analysis::lexicon;
use crate::domain::{Classification, DecisionOrigin, EntityCategory, EntitySpan, SpanOrigin};

/// Confidence floor for a recognizer person name.
const CONFIDENCE_PERSON_NAME: f64 = 0.75;
/// Confidence floor for a validated strong identifier.
const CONFIDENCE_IDENTIFIER: f64 = 0.95;
/// Confidence floor for an explicit sensitive-category entity.
const CONFIDENCE_SENSITIVE: f64 = 0.85;
/// Confidence floor for the declarative-context signal.
const CONFIDENCE_CONTEXT: f64 = 0.90;

/// Aggregates reconciled entities into a classification verdict.
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Build the verdict for one document.
    ///
    /// `spans` must be the reconciler's output (non-overlapping, sorted by
    /// start) so the evidence order is deterministic.
    pub fn classify(
        &self,
        text: &str,
        spans: &[EntitySpan],
        contextual_signal: bool,
    ) -> Classification {
        let mut result = Classification::empty();

        for span in spans {
            let span_text = span.text(text);

            match span.category {
                EntityCategory::Pessoa if span.origin == SpanOrigin::Recognizer => {
                    let normalized = lexicon::normalize(span_text);
                    if lexicon::is_excluded_name(&normalized) {
                        continue;
                    }
                    result.add_detected_type(
                        span.category.detected_type(),
                        DecisionOrigin::Recognizer,
                        CONFIDENCE_PERSON_NAME,
                    );
                    result.push_evidence(format!("Nome detectado: {span_text}"));
                }
                category if category.is_identifier() => {
                    let origin = match span.origin {
                        SpanOrigin::PatternRule => DecisionOrigin::PatternRule,
                        SpanOrigin::Recognizer => DecisionOrigin::Recognizer,
                    };
                    result.add_detected_type(
                        category.detected_type(),
                        origin,
                        CONFIDENCE_IDENTIFIER,
                    );
                    result.push_evidence(format!("Dado pessoal validado: {}", category.label()));
                }
                category => {
                    if let Some(sensitive) = category.sensitive_category() {
                        result.add_sensitive_category(
                            sensitive,
                            DecisionOrigin::RecognizerHeuristic,
                            CONFIDENCE_SENSITIVE,
                        );
                        result.push_evidence(format!("Dado sensível: {span_text}"));
                    }
                    // LOC/ORG/MISC carry no personal data on their own
                }
            }
        }

        if contextual_signal {
            result.add_sensitive_category("saude", DecisionOrigin::Context, CONFIDENCE_CONTEXT);
            result.push_evidence("Contexto sensível declarado".to_string());
        }

        result.finalize();
        result
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
