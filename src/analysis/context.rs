//! Contextual phrase matching
//!
//! The contextual matcher is an external collaborator at the boundary of
//! the core: given the document and its reconciled entities, it answers a
//! single boolean question - does the text declare a sensitive condition
//! in the first person ("tenho HIV", "sou portador de ...")?
//!
//! [`DeclarativeContextMatcher`] is the built-in token-window
//! implementation; any predicate satisfying [`ContextMatcher`] can be
//! substituted.

use crate::analysis::lexicon;
use crate::domain::{EntityCategory, EntitySpan};

/// Boolean predicate over the reconciled document.
pub trait ContextMatcher: Send + Sync {
    /// True when a declarative sensitive phrase co-occurs with a
    /// sensitive-category entity.
    fn matches(&self, text: &str, entities: &[EntitySpan]) -> bool;
}

/// A word token: half-open byte offsets into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
}

/// Split text into alphanumeric word tokens with byte offsets.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphanumeric() {
            if current.is_none() {
                current = Some(idx);
            }
        } else if let Some(start) = current.take() {
            tokens.push(Token { start, end: idx });
        }
    }
    if let Some(start) = current {
        tokens.push(Token {
            start,
            end: text.len(),
        });
    }

    tokens
}

/// Token-window matcher for first-person declarative phrasing.
///
/// Fires when a declarative marker ("sou", "tenho", "portador", ...)
/// appears at most `window` tokens before a health entity.
pub struct DeclarativeContextMatcher {
    window: usize,
}

impl DeclarativeContextMatcher {
    /// Create a matcher with the given token window.
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Default for DeclarativeContextMatcher {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ContextMatcher for DeclarativeContextMatcher {
    fn matches(&self, text: &str, entities: &[EntitySpan]) -> bool {
        let health_spans: Vec<&EntitySpan> = entities
            .iter()
            .filter(|e| e.category == EntityCategory::SensivelSaude)
            .collect();
        if health_spans.is_empty() {
            return false;
        }

        let tokens = tokenize(text);

        for span in health_spans {
            let entity_idx = match tokens
                .iter()
                .position(|t| t.start <= span.start && span.start < t.end)
            {
                Some(i) => i,
                None => continue,
            };

            let window_start = entity_idx.saturating_sub(self.window);
            for token in &tokens[window_start..entity_idx] {
                let word = lexicon::normalize(&text[token.start..token.end]);
                if lexicon::DECLARATIVE_MARKERS.contains(&word.as_str()) {
                    return true;
                }
            }
        }

        false
    }
}
