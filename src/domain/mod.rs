//! Domain models and types for Vigia.
//!
//! This module contains the core domain types shared across the pipeline:
//!
//! - **Entity spans** ([`EntitySpan`], [`EntityCategory`], [`SpanOrigin`]) -
//!   labeled, immutable intervals into the source text
//! - **Classification result** ([`Classification`], [`DecisionOrigin`]) -
//!   the auditable verdict produced per input text
//! - **Error types** ([`VigiaError`], [`RecognizerError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VigiaError>`]:
//!
//! ```rust
//! use vigia::domain::{Result, VigiaError};
//!
//! fn example() -> Result<()> {
//!     let config = vigia::config::load_config("vigia.toml")?;
//!     Ok(())
//! }
//! ```

pub mod classification;
pub mod errors;
pub mod result;
pub mod span;

// Re-export commonly used types for convenience
pub use classification::{Classification, DecisionOrigin};
pub use errors::{RecognizerError, VigiaError};
pub use result::Result;
pub use span::{EntityCategory, EntitySpan, SpanOrigin};
