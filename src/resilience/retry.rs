//! Retry with exponential backoff.
//!
//! # Responsibilities
//! - Drive the attempt loop for one in-flight computation
//! - Sleep `base * 2^i` between attempts
//! - Surface only the terminal, post-exhaustion failure
//!
//! # Design Decisions
//! - Applies only inside an in-flight computation; cache hits and
//!   piggy-backed waits never pass through here
//! - Timeouts count against the retry budget like any other failure
//! - Callers never observe intermediate failures

use std::time::Duration;

use serde_json::Value;

use crate::config::schema::RetryConfig;
use crate::mux::types::{CallError, Executor};
use crate::observability::metrics;
use crate::resilience::{backoff, timeout};

/// Run the executor under the retry policy, each attempt bounded by
/// `attempt_timeout`. Returns the first success, or
/// [`CallError::RetriesExhausted`] wrapping the last failure once
/// `max_retries` retries have been spent.
pub async fn execute_with_retry(
    policy: &RetryConfig,
    attempt_timeout: Duration,
    method: &str,
    params: &Value,
    executor: &dyn Executor,
) -> Result<Value, CallError> {
    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let err = match timeout::bounded_attempt(attempt_timeout, method, params, executor).await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        let retries_used = attempts - 1;
        if retries_used >= policy.max_retries {
            tracing::warn!(method, attempts, error = %err, "retries exhausted");
            return Err(CallError::RetriesExhausted {
                attempts,
                last: Box::new(err),
            });
        }

        let delay = backoff::delay_for(retries_used, policy.base_delay_ms, policy.max_delay_ms);
        tracing::warn!(method, attempt = attempts, ?delay, error = %err, "attempt failed, backing off");
        metrics::record_retry();
        tokio::time::sleep(delay).await;
    }
}
