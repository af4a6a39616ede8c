//! Structural validators for matched text
//!
//! Each category with a checksum or calendar structure has exactly one
//! validator. Validators are pure and deterministic: same text in, same
//! verdict out. A category without a registered validator always passes.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Registered validators, referenced by name from the pattern catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// CPF weighted-sum-mod-11 check digits
    CpfChecksum,
    /// Calendar-plausible birth date
    BirthDate,
}

impl ValidatorKind {
    /// Parse a validator name from the catalog TOML.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cpf" => Some(Self::CpfChecksum),
            "birth_date" => Some(Self::BirthDate),
            _ => None,
        }
    }
}

/// Run the validator registered for a rule against the matched text.
pub fn validate(kind: ValidatorKind, matched_text: &str, birth_year_range: (i32, i32)) -> bool {
    match kind {
        ValidatorKind::CpfChecksum => validate_cpf(matched_text),
        ValidatorKind::BirthDate => {
            validate_birth_date(matched_text, birth_year_range.0, birth_year_range.1)
        }
    }
}

/// Validate a CPF (11-digit person tax ID).
///
/// Strips non-digits, rejects wrong lengths and the well-known repeated
/// sequences ("111.111.111-11" passes the arithmetic but is not issued),
/// then recomputes both check digits: weights 10..2 for the first,
/// 11..2 for the second, check value `(sum * 10 % 11) % 10`.
pub fn validate_cpf(text: &str) -> bool {
    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let sum1: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (10 - i as u32))
        .sum();
    let dig1 = (sum1 * 10 % 11) % 10;

    let sum2: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (11 - i as u32))
        .sum();
    let dig2 = (sum2 * 10 % 11) % 10;

    digits[9] == dig1 && digits[10] == dig2
}

/// Validate a birth-date-like string.
///
/// Accepts day/month/year with a 2-or-4-digit year. Two-digit years pivot
/// at 24: greater means 1900s, otherwise 2000s. The date must exist on the
/// calendar and the year must fall within `[min_year, max_year]`.
pub fn validate_birth_date(text: &str, min_year: i32, max_year: i32) -> bool {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    let re = DATE_RE
        .get_or_init(|| Regex::new(r"(\d{1,2})[/.-](\d{1,2})[/.-](\d{2,4})").expect("date regex"));

    let caps = match re.captures(text) {
        Some(c) => c,
        None => return false,
    };

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let mut year: i32 = caps[3].parse().unwrap_or(0);

    if year < 100 {
        year = if year > 24 { 1900 + year } else { 2000 + year };
    }

    if !(min_year..=max_year).contains(&year) {
        return false;
    }

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
