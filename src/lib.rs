// Vigia - Personal-Data Classification for Portuguese Administrative Text
// Copyright (c) 2025 Vigia Contributors
// Licensed under the MIT License

//! # Vigia - LGPD Personal-Data Classification
//!
//! Vigia classifies free-form Portuguese administrative text (public-records
//! requests, ouvidoria tickets, SEI process notes) and decides whether it
//! contains personal data and, further, sensitive personal data (health,
//! religion, ethnicity). Every verdict carries a confidence score, evidence
//! strings, and a provenance trail recording which detection source
//! contributed each finding.
//!
//! ## Overview
//!
//! The pipeline merges two detection sources and validates the result:
//! - **Scanning** raw text with a catalog of pattern rules (CPF, phone,
//!   email, SEI process numbers, utility enrollments, ...)
//! - **Filtering** likely false positives (bare years, legislative
//!   citations, short digit runs) and running per-category checksum and
//!   calendar validators
//! - **Reconciling** catalog spans with spans from an external
//!   named-entity recognizer into one non-overlapping set
//! - **Aggregating** the surviving entities plus a contextual signal into
//!   an auditable [`domain::Classification`]
//!
//! ## Architecture
//!
//! Vigia follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`analysis`] - Classification pipeline (catalog, filter, validators,
//!   reconciler, classifier, engine)
//! - [`adapters`] - External recognizer integrations (HTTP sidecar,
//!   in-process lexicon)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vigia::adapters::recognizer::create_recognizer;
//! use vigia::analysis::AnalysisEngine;
//! use vigia::config::VigiaConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VigiaConfig::default();
//!
//!     // The recognizer is created once and injected; classification
//!     // calls share it and run independently.
//!     let recognizer = create_recognizer(&config.recognizer)?;
//!     let engine = AnalysisEngine::new(&config, recognizer)?;
//!
//!     let verdict = engine.analyze("Meu CPF é 123.456.789-09").await?;
//!     println!("{}", serde_json::to_string_pretty(&verdict)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Vigia uses [`domain::VigiaError`] throughout. A recognizer fault
//! surfaces as [`domain::VigiaError::AnalysisUnavailable`]; the
//! classification call fails atomically and is never partially applied.
//!
//! ## Logging
//!
//! Vigia uses structured logging with the `tracing` crate. Document
//! content and matched values are never logged; the audit trail stores
//! SHA-256 hashes of evidence strings instead.

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
