//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Recognizer Provider: {}", config.recognizer.provider);
        if let Some(ref endpoint) = config.recognizer.endpoint {
            println!("  Recognizer Endpoint: {endpoint}");
        }
        println!("  Context Window: {} tokens", config.analysis.context_window);
        println!(
            "  Plausible Birth Years: {}-{}",
            config.analysis.birth_year_min, config.analysis.birth_year_max
        );
        println!("  Batch Concurrency: {}", config.analysis.batch_concurrency);
        println!("  Audit Enabled: {}", config.audit.enabled);
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        }
        println!();
        Ok(0)
    }
}
