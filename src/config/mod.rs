//! Configuration management for Vigia.
//!
//! Configuration comes from a TOML file (`vigia.toml` by default) with two
//! override layers applied in order:
//!
//! 1. `${VAR}` placeholders inside the file are substituted from the
//!    environment (used for secrets kept out of version control);
//! 2. `VIGIA_<SECTION>_<KEY>` environment variables override individual
//!    fields.
//!
//! ```no_run
//! use vigia::config::load_config;
//!
//! let config = load_config("vigia.toml").expect("failed to load config");
//! assert_eq!(config.application.name, "vigia");
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    AnalysisSettings, ApplicationConfig, AuditConfig, LoggingConfig, RecognizerConfig, VigiaConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
