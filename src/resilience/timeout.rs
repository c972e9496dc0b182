//! Per-attempt timeout enforcement.
//!
//! # Responsibilities
//! - Bound each individual executor invocation by a fixed deadline
//! - Signal the executor for cancellation when the deadline fires
//!
//! # Design Decisions
//! - Uses Tokio's timeout facility; the timer is disarmed as soon as the
//!   attempt settles on any path
//! - A fired deadline cancels only the current attempt, never the whole
//!   retry sequence
//! - Timeout failures are distinct from executor failures

use std::time::Duration;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::mux::types::{CallError, Executor};
use crate::observability::metrics;

/// Run one executor invocation under the per-attempt deadline.
///
/// The executor receives a child token that fires if the deadline
/// elapses; the invocation future itself is dropped at that point, so
/// work spawned by the executor must watch the token to stop promptly.
pub async fn bounded_attempt(
    limit: Duration,
    method: &str,
    params: &Value,
    executor: &dyn Executor,
) -> Result<Value, CallError> {
    let cancel = CancellationToken::new();
    let attempt = executor.execute(method, params, cancel.child_token());

    match tokio::time::timeout(limit, attempt).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(CallError::executor(err)),
        Err(_) => {
            cancel.cancel();
            metrics::record_timeout();
            tracing::warn!(method, ?limit, "attempt timed out");
            Err(CallError::Timeout(limit))
        }
    }
}
