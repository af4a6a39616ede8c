//! Configuration schema types
//!
//! This module defines the configuration structure mapped from `vigia.toml`.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Vigia configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VigiaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Analysis pipeline tuning
    #[serde(default)]
    pub analysis: AnalysisSettings,

    /// External recognizer configuration
    #[serde(default)]
    pub recognizer: RecognizerConfig,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VigiaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.analysis.validate()?;
        self.recognizer.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name (used in log output)
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Analysis pipeline tuning
///
/// Numeric bounds for the false-positive heuristics and validators.
/// Defaults mirror the audited rule set; override with care.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Lower bound of the bare-year false-positive window
    #[serde(default = "default_year_min")]
    pub year_min: i32,

    /// Upper bound of the bare-year false-positive window
    #[serde(default = "default_year_max")]
    pub year_max: i32,

    /// Global minimum digit-run length for filtered categories
    #[serde(default = "default_min_digits")]
    pub min_digits: usize,

    /// Earliest plausible birth year
    #[serde(default = "default_birth_year_min")]
    pub birth_year_min: i32,

    /// Latest plausible birth year
    #[serde(default = "default_birth_year_max")]
    pub birth_year_max: i32,

    /// Token window for the declarative-context matcher
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Concurrent classifications in batch mode
    #[serde(default = "default_batch_concurrency")]
    pub batch_concurrency: usize,

    /// Optional path to a pattern catalog TOML overriding the embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_catalog: Option<PathBuf>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            year_min: default_year_min(),
            year_max: default_year_max(),
            min_digits: default_min_digits(),
            birth_year_min: default_birth_year_min(),
            birth_year_max: default_birth_year_max(),
            context_window: default_context_window(),
            batch_concurrency: default_batch_concurrency(),
            pattern_catalog: None,
        }
    }
}

impl AnalysisSettings {
    fn validate(&self) -> Result<(), String> {
        if self.year_min > self.year_max {
            return Err(format!(
                "year_min ({}) must not exceed year_max ({})",
                self.year_min, self.year_max
            ));
        }
        if self.birth_year_min > self.birth_year_max {
            return Err(format!(
                "birth_year_min ({}) must not exceed birth_year_max ({})",
                self.birth_year_min, self.birth_year_max
            ));
        }
        if self.context_window == 0 {
            return Err("context_window must be at least 1".to_string());
        }
        if self.batch_concurrency == 0 {
            return Err("batch_concurrency must be at least 1".to_string());
        }
        if let Some(ref path) = self.pattern_catalog {
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "pattern_catalog must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// External recognizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Recognizer provider: "lexicon" (in-process) or "http" (NER sidecar)
    #[serde(default = "default_recognizer_provider")]
    pub provider: String,

    /// Base URL of the NER service (required for the http provider)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Bearer token for the NER service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_recognizer_timeout")]
    pub timeout_seconds: u64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            provider: default_recognizer_provider(),
            endpoint: None,
            api_key: None,
            timeout_seconds: default_recognizer_timeout(),
        }
    }
}

impl RecognizerConfig {
    fn validate(&self) -> Result<(), String> {
        match self.provider.as_str() {
            "lexicon" => Ok(()),
            "http" => match self.endpoint {
                Some(ref endpoint)
                    if endpoint.starts_with("http://") || endpoint.starts_with("https://") =>
                {
                    Ok(())
                }
                Some(ref endpoint) => Err(format!(
                    "recognizer endpoint must be an http(s) URL: {endpoint}"
                )),
                None => Err(
                    "recognizer endpoint is required when provider = 'http'".to_string(),
                ),
            },
            other => Err(format!(
                "Unsupported recognizer provider: {other}. Supported providers: lexicon, http"
            )),
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the audit log
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines format for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging (console logging is always on)
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for rotated log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_app_name() -> String {
    "vigia".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_year_min() -> i32 {
    1900
}

fn default_year_max() -> i32 {
    2035
}

fn default_min_digits() -> usize {
    3
}

fn default_birth_year_min() -> i32 {
    1904
}

fn default_birth_year_max() -> i32 {
    2019
}

fn default_context_window() -> usize {
    10
}

fn default_batch_concurrency() -> usize {
    8
}

fn default_recognizer_provider() -> String {
    "lexicon".to_string()
}

fn default_recognizer_timeout() -> u64 {
    30
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/classifications.log")
}

fn default_audit_json_format() -> bool {
    true
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
