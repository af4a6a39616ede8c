//! In-process rule-based recognizer
//!
//! Reference implementation of [`EntityRecognizer`] used for tests and
//! offline runs. It tags sensitive-category terms from the static
//! lexicons, CID disease codes, and person-name candidates found as runs
//! of capitalized words (allowing "da"/"de" connectives, as in
//! "Maria da Silva").
//!
//! Runs led by an organization or place marker are tagged ORG/LOC so the
//! classifier never mistakes "Secretaria de Saúde" for a person. This is
//! a heuristic stand-in for the pretrained model, not a reimplementation
//! of it; anything satisfying the trait can replace it.

use super::{EntityRecognizer, RecognizedEntity};
use crate::analysis::context::tokenize;
use crate::analysis::lexicon;
use crate::domain::RecognizerError;
use async_trait::async_trait;
use regex::Regex;

/// Rule-based recognizer over the static lexicons
pub struct LexiconRecognizer {
    cid_regex: Regex,
}

impl LexiconRecognizer {
    pub fn new() -> Self {
        Self {
            cid_regex: Regex::new(r"(?i)\bcid[\s.:]*[a-z]\d+").expect("cid regex"),
        }
    }

    fn sensitive_label(word: &str) -> Option<&'static str> {
        if lexicon::HEALTH_TERMS.contains(&word) {
            Some("SENSIVEL_SAUDE")
        } else if lexicon::RELIGION_TERMS.contains(&word) {
            Some("SENSIVEL_RELIGIAO")
        } else if lexicon::ETHNICITY_TERMS.contains(&word) {
            Some("SENSIVEL_RACA")
        } else {
            None
        }
    }

    /// A name-case word: uppercase initial, lowercase tail, at least two
    /// letters. Rules out acronyms ("GDF", "HIV") and bare initials.
    fn is_name_case(word: &str) -> bool {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() && first.is_alphabetic() => {}
            _ => return false,
        }
        let mut tail_len = 0;
        for c in chars {
            if !c.is_alphabetic() || !c.is_lowercase() {
                return false;
            }
            tail_len += 1;
        }
        tail_len > 0
    }

    /// Collect capitalized-word runs and label each one PER, ORG or LOC.
    fn name_candidates(text: &str, entities: &mut Vec<RecognizedEntity>) {
        let tokens = tokenize(text);
        let words: Vec<&str> = tokens.iter().map(|t| &text[t.start..t.end]).collect();

        let mut i = 0;
        while i < tokens.len() {
            if !Self::is_name_case(words[i]) {
                i += 1;
                continue;
            }

            // extend the run over name-case words and inner connectives
            let run_start = i;
            let mut run_end = i;
            let mut j = i + 1;
            while j < tokens.len() {
                if Self::is_name_case(words[j]) {
                    run_end = j;
                    j += 1;
                } else if lexicon::NAME_CONNECTIVES.contains(&lexicon::normalize(words[j]).as_str())
                    && j + 1 < tokens.len()
                    && Self::is_name_case(words[j + 1])
                {
                    run_end = j + 1;
                    j += 2;
                } else {
                    break;
                }
            }

            let name_words = (run_start..=run_end)
                .filter(|&k| Self::is_name_case(words[k]))
                .count();

            if name_words >= 2 {
                let start = tokens[run_start].start;
                let end = tokens[run_end].end;
                let full = lexicon::normalize(&text[start..end]);
                let first = lexicon::normalize(words[run_start]);

                let label = if lexicon::IGNORED_ORGS.contains(&first.as_str())
                    || lexicon::IGNORED_ORGS.contains(&full.as_str())
                {
                    "ORG"
                } else if lexicon::IGNORED_PLACES.contains(&first.as_str())
                    || lexicon::IGNORED_PLACES.contains(&full.as_str())
                {
                    "LOC"
                } else {
                    "PER"
                };

                entities.push(RecognizedEntity {
                    start,
                    end,
                    label: label.to_string(),
                });
            }

            i = run_end + 1;
        }
    }
}

impl Default for LexiconRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityRecognizer for LexiconRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError> {
        let mut entities = Vec::new();

        for token in tokenize(text) {
            let word = lexicon::normalize(&text[token.start..token.end]);
            if let Some(label) = Self::sensitive_label(&word) {
                entities.push(RecognizedEntity {
                    start: token.start,
                    end: token.end,
                    label: label.to_string(),
                });
            }
        }

        for m in self.cid_regex.find_iter(text) {
            entities.push(RecognizedEntity {
                start: m.start(),
                end: m.end(),
                label: "SENSIVEL_SAUDE".to_string(),
            });
        }

        Self::name_candidates(text, &mut entities);

        entities.sort_by_key(|e| e.start);
        Ok(entities)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
