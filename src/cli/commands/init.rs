//! Init command implementation
//!
//! Generates a sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "vigia.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Vigia configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. For the http provider, set VIGIA_NER_API_KEY in a .env file");
                println!("  3. Validate configuration: vigia validate-config");
                println!("  4. Classify text: vigia analyze --text 'Meu CPF é ...'");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate sample configuration
    fn generate_config() -> String {
        r#"# Vigia Configuration File
# Personal-data classification for Portuguese administrative text

[application]
name = "vigia"
log_level = "info"

[analysis]
# Bare-year false-positive window
year_min = 1900
year_max = 2035
# Minimum digit-run length for filtered categories
min_digits = 3
# Plausible birth-year range for date validation
birth_year_min = 1904
birth_year_max = 2019
# Token window for the declarative-context matcher
context_window = 10
# Concurrent classifications in batch mode
batch_concurrency = 8
# Uncomment to override the embedded pattern catalog
# pattern_catalog = "patterns/catalog.toml"

[recognizer]
# "lexicon" runs in-process; "http" calls an external NER service
provider = "lexicon"
# endpoint = "http://localhost:9090"
# api_key = "${VIGIA_NER_API_KEY}"
timeout_seconds = 30

[audit]
enabled = false
log_path = "./audit/classifications.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let content = InitArgs::generate_config();
        let config: crate::config::VigiaConfig = toml::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.recognizer.provider, "lexicon");
    }
}
