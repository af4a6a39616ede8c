//! Analyze command implementation
//!
//! Classifies a single text, a file with one document per line, or stdin.
//! Single-text mode prints one JSON object; the other modes print one
//! JSON line per input document.

use crate::adapters::recognizer::create_recognizer;
use crate::analysis::AnalysisEngine;
use crate::config::{load_config, VigiaConfig};
use crate::domain::VigiaError;
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to classify (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File with one document per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Pretty-print the JSON output (single-text mode only)
    #[arg(long)]
    pub pretty: bool,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = if Path::new(config_path).exists() {
            match load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    return Ok(2);
                }
            }
        } else {
            tracing::debug!(config_path, "config file not found, using defaults");
            VigiaConfig::default()
        };

        let recognizer = match create_recognizer(&config.recognizer) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(2);
            }
        };
        tracing::info!(provider = recognizer.name(), "recognizer ready");

        let engine = AnalysisEngine::new(&config, recognizer)?;

        if let Some(ref text) = self.text {
            return self.analyze_one(&engine, text).await;
        }

        let documents: Vec<String> = match self.file {
            Some(ref path) => std::fs::read_to_string(path)?
                .lines()
                .map(str::to_string)
                .collect(),
            None => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                return self.analyze_one(&engine, buffer.trim_end()).await;
            }
        };

        tracing::info!(documents = documents.len(), "starting batch analysis");

        let mut failures = 0usize;
        for result in engine.analyze_batch(&documents).await {
            match result {
                Ok(classification) => {
                    println!("{}", serde_json::to_string(&classification)?);
                }
                Err(e) => {
                    failures += 1;
                    tracing::error!(error = %e, "document analysis failed");
                    println!(r#"{{"error":"analysis_unavailable"}}"#);
                }
            }
        }

        if failures > 0 {
            eprintln!("{failures} document(s) could not be analyzed");
            return Ok(4);
        }
        Ok(0)
    }

    async fn analyze_one(&self, engine: &AnalysisEngine, text: &str) -> anyhow::Result<i32> {
        match engine.analyze(text).await {
            Ok(classification) => {
                let json = if self.pretty {
                    serde_json::to_string_pretty(&classification)?
                } else {
                    serde_json::to_string(&classification)?
                };
                println!("{json}");
                Ok(0)
            }
            Err(VigiaError::AnalysisUnavailable(e)) => {
                tracing::error!(error = %e, "recognizer unavailable");
                eprintln!("Error: analysis service unavailable");
                Ok(4)
            }
            Err(e) => Err(e.into()),
        }
    }
}
