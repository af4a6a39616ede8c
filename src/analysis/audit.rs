//! Audit trail for classification verdicts
//!
//! Compliance pipelines need to reconstruct why a document was flagged.
//! Each classification appends one entry to a JSONL (or plain-text) log.
//! Evidence strings contain raw personal data, so only their SHA-256
//! hashes are written - never plaintext.

use crate::domain::Classification;
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use uuid::Uuid;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditEntry {
    analysis_id: String,
    timestamp: String,
    contains_personal_data: bool,
    contains_sensitive_data: bool,
    decision_origins: Vec<String>,
    detected_types: Vec<String>,
    sensitive_categories: Vec<String>,
    confidence: f64,
    /// SHA-256 hashes of the evidence strings
    evidence_hashes: Vec<String>,
    processing_time_ms: u64,
}

/// Audit logger for classification operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log one classification verdict
    pub fn log_classification(
        &self,
        analysis_id: Uuid,
        result: &Classification,
        processing_time_ms: u64,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditEntry {
            analysis_id: analysis_id.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            contains_personal_data: result.contains_personal_data,
            contains_sensitive_data: result.contains_sensitive_data,
            decision_origins: result.decision_origins.iter().cloned().collect(),
            detected_types: result.detected_types.iter().cloned().collect(),
            sensitive_categories: result.sensitive_categories.iter().cloned().collect(),
            confidence: result.confidence,
            evidence_hashes: result.evidence.iter().map(|e| hash_evidence(e)).collect(),
            processing_time_ms,
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Analysis: {} | Personal: {} | Sensitive: {} | Confidence: {:.2} | Time: {}ms",
                entry.timestamp,
                entry.analysis_id,
                entry.contains_personal_data,
                entry.contains_sensitive_data,
                entry.confidence,
                entry.processing_time_ms
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash an evidence string using SHA-256
fn hash_evidence(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
