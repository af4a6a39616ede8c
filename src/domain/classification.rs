//! Classification result model
//!
//! The [`Classification`] record is the engine's sole output. It is built
//! fresh for every input text, never persisted, and serializes with the
//! external field names consumed by the compliance pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Provenance of a finding: which detection source justified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOrigin {
    /// A pattern-catalog rule matched (and survived filter + validation)
    PatternRule,
    /// The external recognizer tagged the entity
    Recognizer,
    /// A recognizer tag combined with the sensitive-category heuristics
    RecognizerHeuristic,
    /// The declarative-context matcher fired
    Context,
}

impl DecisionOrigin {
    /// Normalized origin string used in the output record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PatternRule => "pattern_rule",
            Self::Recognizer => "recognizer",
            Self::RecognizerHeuristic => "recognizer+heuristic",
            Self::Context => "context",
        }
    }
}

/// Auditable classification verdict for one input text.
///
/// All sets are `BTreeSet`s so output ordering is lexicographic and
/// deterministic. Evidence keeps insertion order: one entry per accepted
/// contributing span, plus at most one for the contextual signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Whether any personal data category was detected
    pub contains_personal_data: bool,

    /// Whether any sensitive category (health/religion/ethnicity) was detected
    pub contains_sensitive_data: bool,

    /// Which detection sources contributed to the verdict
    #[serde(rename = "origem_decisao")]
    pub decision_origins: BTreeSet<String>,

    /// Normalized detected personal-data types
    #[serde(rename = "tipos_detectados")]
    pub detected_types: BTreeSet<String>,

    /// Normalized sensitive categories
    #[serde(rename = "categorias_sensiveis")]
    pub sensitive_categories: BTreeSet<String>,

    /// Confidence in [0, 1], rounded to 2 decimals; 0.0 when nothing matched
    #[serde(rename = "confianca")]
    pub confidence: f64,

    /// Human-readable evidence, one entry per accepted finding
    #[serde(rename = "evidencias")]
    pub evidence: Vec<String>,
}

impl Default for Classification {
    fn default() -> Self {
        Self::empty()
    }
}

impl Classification {
    /// The all-empty, zero-confidence verdict (also the result for empty
    /// or entity-free input, which is valid input, not an error).
    pub fn empty() -> Self {
        Self {
            contains_personal_data: false,
            contains_sensitive_data: false,
            decision_origins: BTreeSet::new(),
            detected_types: BTreeSet::new(),
            sensitive_categories: BTreeSet::new(),
            confidence: 0.0,
            evidence: Vec::new(),
        }
    }

    /// Record a detected personal-data type.
    pub fn add_detected_type(&mut self, detected_type: &str, origin: DecisionOrigin, floor: f64) {
        self.detected_types.insert(detected_type.to_string());
        self.decision_origins.insert(origin.as_str().to_string());
        self.raise_confidence(floor);
    }

    /// Record a sensitive category.
    pub fn add_sensitive_category(&mut self, category: &str, origin: DecisionOrigin, floor: f64) {
        self.sensitive_categories.insert(category.to_string());
        self.decision_origins.insert(origin.as_str().to_string());
        self.raise_confidence(floor);
    }

    /// Append an evidence string (kept in detection order).
    pub fn push_evidence(&mut self, evidence: String) {
        self.evidence.push(evidence);
    }

    /// Raise the confidence floor. Confidence only ever goes up during a walk.
    pub fn raise_confidence(&mut self, floor: f64) {
        if floor > self.confidence {
            self.confidence = floor;
        }
    }

    /// Derive the boolean verdict flags and round confidence to 2 decimals.
    /// Called once, after the span walk.
    pub fn finalize(&mut self) {
        self.contains_personal_data = !self.detected_types.is_empty();
        self.contains_sensitive_data = !self.sensitive_categories.is_empty();
        self.confidence = (self.confidence * 100.0).round() / 100.0;
    }
}
