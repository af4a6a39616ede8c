//! Classification pipeline for Vigia
//!
//! This module holds the entity-merge-and-validate pipeline that decides
//! whether a Portuguese administrative text contains personal data and,
//! further, sensitive personal data.
//!
//! # Architecture
//!
//! Raw text flows through:
//! - **Catalog**: regex rules over identity documents, contact info,
//!   financial, vehicle and process-number categories
//! - **Filter + Validators**: false-positive heuristics, then per-category
//!   structural/checksum validation
//! - **Reconciler**: merges catalog spans with recognizer spans into one
//!   non-overlapping set (longest-span-wins)
//! - **Classifier**: folds the reconciled set plus the contextual signal
//!   into a confidence-scored, provenance-tracked verdict
//!
//! # Usage
//!
//! ```rust,ignore
//! use vigia::analysis::AnalysisEngine;
//! use vigia::adapters::recognizer::create_recognizer;
//!
//! let recognizer = create_recognizer(&config.recognizer)?;
//! let engine = AnalysisEngine::new(&config, recognizer)?;
//! let verdict = engine.analyze(texto).await?;
//! ```

pub mod audit;
pub mod catalog;
pub mod classifier;
pub mod context;
pub mod filter;
pub mod lexicon;
pub mod reconciler;
pub mod validators;

mod engine;

// Re-export main types
pub use audit::AuditLogger;
pub use catalog::PatternCatalog;
pub use classifier::Classifier;
pub use context::{ContextMatcher, DeclarativeContextMatcher};
pub use engine::AnalysisEngine;
pub use filter::FalsePositiveFilter;
pub use reconciler::reconcile;
