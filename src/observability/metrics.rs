//! Metrics collection.
//!
//! # Metrics
//! - `callmux_cache_hits_total` / `callmux_cache_misses_total` (counters)
//! - `callmux_cache_entries` (gauge): live cache entry count
//! - `callmux_coalesced_total` (counter): callers served by an existing
//!   in-flight computation
//! - `callmux_retries_total` (counter): backed-off re-attempts
//! - `callmux_timeouts_total` (counter): attempts that hit the deadline
//! - `callmux_calls_total` (counter, by outcome): settled computations
//!
//! # Design Decisions
//! - Cheap atomic updates only; no histograms in the hot path
//! - The embedding application owns the recorder/exporter

use metrics::{counter, gauge};

pub fn record_cache_hit() {
    counter!("callmux_cache_hits_total").increment(1);
}

pub fn record_cache_miss() {
    counter!("callmux_cache_misses_total").increment(1);
}

pub fn record_cache_size(entries: usize) {
    gauge!("callmux_cache_entries").set(entries as f64);
}

pub fn record_coalesced() {
    counter!("callmux_coalesced_total").increment(1);
}

pub fn record_retry() {
    counter!("callmux_retries_total").increment(1);
}

pub fn record_timeout() {
    counter!("callmux_timeouts_total").increment(1);
}

pub fn record_call_outcome(outcome: &'static str) {
    counter!("callmux_calls_total", "outcome" => outcome).increment(1);
}
