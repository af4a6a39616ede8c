//! Named-entity recognizer boundary
//!
//! The recognizer is a black box: given text, it returns labeled spans
//! drawn from a fixed vocabulary (PER/LOC/ORG/MISC plus the SENSIVEL_*
//! tags). The core queries it exactly once per input text and never
//! reimplements it.
//!
//! Two providers ship with the crate:
//! - [`http::HttpRecognizer`] - calls an external NER service (the
//!   pretrained model runs as a sidecar)
//! - [`lexicon::LexiconRecognizer`] - in-process rule-based reference
//!   implementation, useful for tests and offline runs

pub mod http;
pub mod lexicon;

use crate::config::RecognizerConfig;
use crate::domain::{RecognizerError, VigiaError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A labeled span as reported by a recognizer: byte offsets into the
/// input text plus a label from the recognizer vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedEntity {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Label from the recognizer vocabulary
    pub label: String,
}

/// Trait for named-entity recognizer implementations
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entities in `text`, ordered by start offset.
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}

/// Create the recognizer selected by configuration
///
/// This factory is called once at startup; the returned handle is shared
/// across all classification calls (construct once, reuse many).
///
/// # Errors
///
/// Returns an error if the provider is unknown or its configuration is
/// incomplete.
pub fn create_recognizer(
    config: &RecognizerConfig,
) -> crate::domain::Result<Arc<dyn EntityRecognizer>> {
    match config.provider.as_str() {
        "lexicon" => Ok(Arc::new(lexicon::LexiconRecognizer::new())),
        "http" => Ok(Arc::new(http::HttpRecognizer::new(config)?)),
        other => Err(VigiaError::Configuration(format!(
            "Unsupported recognizer provider: {other}. Supported providers: lexicon, http"
        ))),
    }
}
