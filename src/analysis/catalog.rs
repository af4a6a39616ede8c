//! Pattern catalog for personal-identifier detection
//!
//! The catalog is static configuration: a table of named rules loaded from
//! TOML once at engine construction and read-only afterward.

use crate::analysis::validators::ValidatorKind;
use crate::domain::EntityCategory;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Rule definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDefinition {
    /// Regex patterns for this rule
    pub patterns: Vec<String>,
    /// Entity category label
    pub category: String,
    /// Optional structural validator for matched text
    #[serde(default)]
    pub validator: Option<String>,
    /// Run the false-positive heuristics on each match
    #[serde(default)]
    pub false_positive_check: bool,
    /// Minimum digit-run length for this category
    #[serde(default)]
    pub min_digits: Option<usize>,
}

/// Compiled rule with metadata
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// Compiled regex
    pub regex: Regex,
    /// Entity category
    pub category: EntityCategory,
    /// Structural validator, if the category has one
    pub validator: Option<ValidatorKind>,
    /// Whether matches go through the false-positive filter
    pub false_positive_check: bool,
    /// Category-specific minimum digit-run length
    pub min_digits: Option<usize>,
}

/// Catalog file container
///
/// A `BTreeMap` keeps rule order deterministic across processes, which in
/// turn keeps tie-breaking in the reconciler deterministic.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    patterns: BTreeMap<String, RuleDefinition>,
}

/// A raw catalog match: byte offsets plus the rule that produced it.
#[derive(Debug, Clone, Copy)]
pub struct RawMatch<'c> {
    pub rule: &'c CompiledRule,
    pub start: usize,
    pub end: usize,
}

/// Compiled pattern catalog
pub struct PatternCatalog {
    rules: Vec<CompiledRule>,
}

impl PatternCatalog {
    /// Load a catalog from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern catalog: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Build a catalog from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).context("Failed to parse pattern catalog TOML")?;

        let mut rules = Vec::new();

        for (name, def) in file.patterns {
            let category = EntityCategory::parse_label(&def.category).with_context(|| {
                format!("Unknown category in rule '{}': {}", name, def.category)
            })?;

            let validator = match def.validator.as_deref() {
                Some(v) => Some(ValidatorKind::parse(v).with_context(|| {
                    format!("Unknown validator in rule '{name}': {v}")
                })?),
                None => None,
            };

            for pattern_str in &def.patterns {
                let regex = Regex::new(pattern_str)
                    .with_context(|| format!("Invalid regex in rule '{name}': {pattern_str}"))?;

                rules.push(CompiledRule {
                    regex,
                    category,
                    validator,
                    false_positive_check: def.false_positive_check,
                    min_digits: def.min_digits,
                });
            }
        }

        Ok(Self { rules })
    }

    /// Build the default catalog embedded in the binary
    pub fn default_catalog() -> Result<Self> {
        let default_toml = include_str!("../../patterns/catalog.toml");
        Self::from_toml(default_toml)
    }

    /// All compiled rules
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Scan `text` with every rule, reporting all non-overlapping matches
    /// per rule. Overlap between matches of different rules is permitted
    /// here; the reconciler resolves it later. Zero-length matches are
    /// discarded.
    pub fn scan<'c>(&'c self, text: &str) -> Vec<RawMatch<'c>> {
        let mut matches = Vec::new();

        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                if m.start() >= m.end() {
                    continue;
                }
                matches.push(RawMatch {
                    rule,
                    start: m.start(),
                    end: m.end(),
                });
            }
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_catalog() {
        let catalog = PatternCatalog::default_catalog().unwrap();
        assert!(!catalog.rules().is_empty());
    }

    #[test]
    fn test_default_catalog_has_cpf_validator() {
        let catalog = PatternCatalog::default_catalog().unwrap();
        let cpf = catalog
            .rules()
            .iter()
            .find(|r| r.category == EntityCategory::Cpf)
            .unwrap();
        assert_eq!(cpf.validator, Some(ValidatorKind::CpfChecksum));
        assert!(cpf.false_positive_check);
    }

    #[test]
    fn test_scan_cpf_and_phone() {
        let catalog = PatternCatalog::default_catalog().unwrap();
        let text = "CPF 123.456.789-09, telefone (61) 99999-9999";
        let matches = catalog.scan(text);

        assert!(matches
            .iter()
            .any(|m| m.rule.category == EntityCategory::Cpf));
        assert!(matches
            .iter()
            .any(|m| m.rule.category == EntityCategory::Telefone));
    }

    #[test]
    fn test_scan_email() {
        let catalog = PatternCatalog::default_catalog().unwrap();
        let matches = catalog.scan("contato: maria.silva@example.gov.br");
        let email = matches
            .iter()
            .find(|m| m.rule.category == EntityCategory::Email)
            .unwrap();
        assert_eq!(
            &"contato: maria.silva@example.gov.br"[email.start..email.end],
            "maria.silva@example.gov.br"
        );
    }

    #[test]
    fn test_scan_keyword_rules() {
        let catalog = PatternCatalog::default_catalog().unwrap();
        let text = "Matrícula nº 123456-7 e hidrômetro 98765";
        let matches = catalog.scan(text);
        assert!(matches
            .iter()
            .any(|m| m.rule.category == EntityCategory::InscricaoGeral));
        assert!(matches
            .iter()
            .any(|m| m.rule.category == EntityCategory::Hidrometro));
    }

    #[test]
    fn test_invalid_category_rejected() {
        let toml = r#"
[patterns.bogus]
patterns = ['\d+']
category = "NOT_A_CATEGORY"
"#;
        assert!(PatternCatalog::from_toml(toml).is_err());
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let toml = r#"
[patterns.bogus]
patterns = ['[unclosed']
category = "CPF"
"#;
        assert!(PatternCatalog::from_toml(toml).is_err());
    }
}
