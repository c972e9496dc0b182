//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (capacity and deadlines must be positive)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MultiplexerConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use thiserror::Error;

use crate::config::schema::MultiplexerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The admission gate needs at least one slot.
    #[error("max_concurrency must be at least 1")]
    ZeroConcurrency,

    /// Attempts need a positive deadline.
    #[error("attempt_timeout_ms must be positive")]
    ZeroAttemptTimeout,

    /// The backoff cap must admit at least the base delay.
    #[error("retries.max_delay_ms ({max}) is below retries.base_delay_ms ({base})")]
    DelayCapBelowBase { base: u64, max: u64 },
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &MultiplexerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.max_concurrency == 0 {
        errors.push(ValidationError::ZeroConcurrency);
    }
    if config.attempt_timeout_ms == 0 {
        errors.push(ValidationError::ZeroAttemptTimeout);
    }
    if config.retries.max_delay_ms < config.retries.base_delay_ms {
        errors.push(ValidationError::DelayCapBelowBase {
            base: config.retries.base_delay_ms,
            max: config.retries.max_delay_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
