//! Exponential backoff.

use std::time::Duration;

/// Calculate the delay before the next retry.
///
/// `retry_index` is zero-based: the delay after the first failure uses
/// index 0. Delays grow as `base * 2^index`, capped at `max_ms`. No
/// jitter is applied: coalescing already keeps one computation per key,
/// so there is no herd to spread out, and callers rely on the exact
/// `base * 2^i` schedule.
pub fn delay_for(retry_index: u32, base_ms: u64, max_ms: u64) -> Duration {
    let exponential = 2u64.saturating_pow(retry_index);
    let delay_ms = base_ms.saturating_mul(exponential);
    Duration::from_millis(delay_ms.min(max_ms))
}
