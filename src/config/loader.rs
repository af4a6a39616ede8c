//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VigiaConfig;
use crate::config::secret_string;
use crate::domain::errors::VigiaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VigiaConfig
/// 4. Applies environment variable overrides (VIGIA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use vigia::config::load_config;
///
/// let config = load_config("vigia.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VigiaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VigiaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VigiaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VigiaConfig = toml::from_str(&contents)
        .map_err(|e| VigiaError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        VigiaError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VigiaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the VIGIA_* prefix
///
/// Environment variables follow the pattern: VIGIA_<SECTION>_<KEY>
/// For example: VIGIA_RECOGNIZER_ENDPOINT, VIGIA_AUDIT_ENABLED
fn apply_env_overrides(config: &mut VigiaConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("VIGIA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Analysis overrides
    if let Ok(val) = std::env::var("VIGIA_ANALYSIS_CONTEXT_WINDOW") {
        if let Ok(window) = val.parse() {
            config.analysis.context_window = window;
        }
    }
    if let Ok(val) = std::env::var("VIGIA_ANALYSIS_BATCH_CONCURRENCY") {
        if let Ok(concurrency) = val.parse() {
            config.analysis.batch_concurrency = concurrency;
        }
    }
    if let Ok(val) = std::env::var("VIGIA_ANALYSIS_PATTERN_CATALOG") {
        config.analysis.pattern_catalog = Some(val.into());
    }

    // Recognizer overrides
    if let Ok(val) = std::env::var("VIGIA_RECOGNIZER_PROVIDER") {
        config.recognizer.provider = val;
    }
    if let Ok(val) = std::env::var("VIGIA_RECOGNIZER_ENDPOINT") {
        config.recognizer.endpoint = Some(val);
    }
    if let Ok(val) = std::env::var("VIGIA_RECOGNIZER_API_KEY") {
        config.recognizer.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("VIGIA_RECOGNIZER_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.recognizer.timeout_seconds = timeout;
        }
    }

    // Audit overrides
    if let Ok(val) = std::env::var("VIGIA_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("VIGIA_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("VIGIA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("VIGIA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
