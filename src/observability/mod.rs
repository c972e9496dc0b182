//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Multiplexer internals produce:
//!     → tracing events (cache hits, coalesced joins, retries, timeouts)
//!     → metrics.rs (counters, gauges)
//!
//! Consumers:
//!     → tracing subscriber installed by the embedding application
//!     → metrics recorder/exporter installed by the embedding application
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or recorder
//! - Metric updates are cheap atomic increments

pub mod metrics;
