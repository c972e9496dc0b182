//! Client-side call multiplexer: dedup, TTL caching, bounded
//! concurrency, retries and per-attempt timeouts for backend calls.

pub mod config;
pub mod mux;
pub mod observability;
pub mod resilience;

pub use config::{validate_config, MultiplexerConfig, RetryConfig, ValidationError};
pub use mux::{
    executor_fn, BoxError, CallError, CallMultiplexer, CallRequest, Executor, ExecutorFn,
};
