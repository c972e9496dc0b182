//! Configuration schema definitions.
//!
//! This module defines the tunables of the call multiplexer. All types
//! derive Serde traits so the embedding application can deserialize them
//! from whatever configuration source it owns; the multiplexer itself
//! never reads files.

use serde::{Deserialize, Serialize};

/// Root configuration for a [`CallMultiplexer`](crate::CallMultiplexer).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MultiplexerConfig {
    /// Maximum number of executor invocations active at once.
    pub max_concurrency: usize,

    /// Deadline for a single executor attempt, in milliseconds.
    pub attempt_timeout_ms: u64,

    /// How long a successful result stays servable from cache, in
    /// milliseconds. Zero disables caching (concurrent dedup still applies).
    pub cache_ttl_ms: u64,

    /// Retry configuration.
    pub retries: RetryConfig,
}

impl Default for MultiplexerConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            attempt_timeout_ms: 30_000,
            cache_ttl_ms: 60_000,
            retries: RetryConfig::default(),
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,

    /// Base delay for exponential backoff in milliseconds.
    pub base_delay_ms: u64,

    /// Maximum delay for exponential backoff in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 100,
            max_delay_ms: 30_000,
        }
    }
}
