//! Call-level types and error definitions.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::Value;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Opaque error type returned by executors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Performs the actual backend call on behalf of the multiplexer.
///
/// Implementations must respect the cancellation token by aborting promptly
/// once it fires, and must tolerate being invoked repeatedly with identical
/// arguments: the multiplexer retries failed attempts, so executors are
/// either idempotent or the caller accepts at-least-once semantics.
pub trait Executor: Send + Sync {
    /// Perform one call attempt.
    fn execute<'a>(
        &'a self,
        method: &'a str,
        params: &'a Value,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>>;
}

/// Wrap an async closure `(method, params, cancel) -> Result` as an
/// [`Executor`].
pub fn executor_fn<F, Fut>(f: F) -> ExecutorFn<F>
where
    F: Fn(String, Value, CancellationToken) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<Value, BoxError>> + Send + 'static,
{
    ExecutorFn { f }
}

/// An [`Executor`] backed by an async closure. See [`executor_fn`].
pub struct ExecutorFn<F> {
    f: F,
}

impl<F, Fut> Executor for ExecutorFn<F>
where
    F: Fn(String, Value, CancellationToken) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<Value, BoxError>> + Send + 'static,
{
    fn execute<'a>(
        &'a self,
        method: &'a str,
        params: &'a Value,
        cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>> {
        (self.f)(method.to_owned(), params.clone(), cancel).boxed()
    }
}

/// One entry of a batched dispatch.
#[derive(Debug, Clone)]
pub struct CallRequest {
    /// Method name forwarded to the executor.
    pub method: String,

    /// Call parameters, structurally compared for dedup and caching.
    pub params: Value,
}

impl CallRequest {
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }
}

/// Errors surfaced by the multiplexer.
///
/// Every failure is a per-call outcome; nothing here is process-fatal.
/// The type is `Clone` because one in-flight computation broadcasts its
/// single outcome to every coalesced caller.
#[derive(Debug, Clone, Error)]
pub enum CallError {
    /// One attempt exceeded the per-attempt deadline.
    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),

    /// The executor failed for reasons opaque to the multiplexer.
    #[error("executor failed: {0}")]
    Executor(Arc<dyn std::error::Error + Send + Sync>),

    /// Terminal state: the retry budget ran out. Wraps the last failure.
    #[error("retries exhausted after {attempts} attempts: {last}")]
    RetriesExhausted {
        /// Total attempts made, including the first.
        attempts: u32,
        /// The failure observed on the final attempt.
        #[source]
        last: Box<CallError>,
    },
}

impl CallError {
    pub(crate) fn executor(err: BoxError) -> Self {
        Self::Executor(Arc::from(err))
    }

    /// True if the terminal cause (unwrapping exhaustion) was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout(_) => true,
            Self::RetriesExhausted { last, .. } => last.is_timeout(),
            Self::Executor(_) => false,
        }
    }
}
