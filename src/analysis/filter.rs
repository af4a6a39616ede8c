//! False-positive filter
//!
//! Numeric and contextual heuristics that reject matches unlikely to be
//! real personal data: bare years, digit runs too short for the category,
//! and numbers cited right after legislative markers ("Lei", "Decreto").
//!
//! The heuristics run before the structural validators and short-circuit
//! on the first hit.

use crate::analysis::lexicon;
use tracing::debug;

/// False-positive filter with configured numeric bounds.
#[derive(Debug, Clone)]
pub struct FalsePositiveFilter {
    year_min: i32,
    year_max: i32,
    min_digits: usize,
}

impl FalsePositiveFilter {
    /// Create a filter with explicit bounds.
    pub fn new(year_min: i32, year_max: i32, min_digits: usize) -> Self {
        Self {
            year_min,
            year_max,
            min_digits,
        }
    }

    /// Decide whether a match is a false positive.
    ///
    /// Rules are independent and evaluated in order; the first hit wins:
    /// 1. a digit run of exactly 4 in the plausible year range is a bare
    ///    year ("Matrícula 2024");
    /// 2. a digit run shorter than the category minimum is noise
    ///    ("Inscrição 1");
    /// 3. a match right after a legislative marker is a citation number,
    ///    not a personal identifier.
    pub fn is_false_positive(
        &self,
        matched_text: &str,
        preceding_token: Option<&str>,
        category_min_digits: Option<usize>,
    ) -> bool {
        let digits: String = matched_text.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() == 4 {
            if let Ok(value) = digits.parse::<i32>() {
                if (self.year_min..=self.year_max).contains(&value) {
                    debug!(matched_text, value, "match rejected: bare year");
                    return true;
                }
            }
        }

        let min_digits = category_min_digits.unwrap_or(self.min_digits);
        if digits.len() < min_digits {
            debug!(matched_text, min_digits, "match rejected: digit run too short");
            return true;
        }

        if let Some(token) = preceding_token {
            if lexicon::is_legal_marker(&lexicon::normalize(token)) {
                debug!(matched_text, token, "match rejected: legislative context");
                return true;
            }
        }

        false
    }
}

impl Default for FalsePositiveFilter {
    fn default() -> Self {
        Self::new(1900, 2035, 3)
    }
}

/// The token immediately preceding byte offset `start`, stripped of
/// punctuation. Used for the legislative-context rule.
pub fn preceding_token(text: &str, start: usize) -> Option<&str> {
    let head = text.get(..start)?;
    let raw = head.split_whitespace().next_back()?;
    let token = raw.trim_matches(|c: char| !c.is_alphanumeric());
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
