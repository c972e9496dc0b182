//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! application-owned config source (any serde format)
//!     → schema.rs (deserialize with defaults)
//!     → validation.rs (semantic checks, all errors reported)
//!     → MultiplexerConfig (validated, immutable)
//!     → CallMultiplexer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a multiplexer is constructed
//! - All fields have defaults so a minimal config is `{}`
//! - Validation separates syntactic (serde) from semantic checks
//! - No file loading here: the embedding application owns that surface

pub mod schema;
pub mod validation;

pub use schema::MultiplexerConfig;
pub use schema::RetryConfig;
pub use validation::{validate_config, ValidationError};
