//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Vigia using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Vigia - personal-data classification for Portuguese administrative text
#[derive(Parser, Debug)]
#[command(name = "vigia")]
#[command(version, about, long_about = None)]
#[command(author = "Vigia Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "vigia.toml", env = "VIGIA_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VIGIA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify text for personal and sensitive data
    Analyze(commands::analyze::AnalyzeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
