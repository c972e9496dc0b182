//! The call multiplexer.
//!
//! # Responsibilities
//! - Turn an arbitrary stream of call requests into a bounded,
//!   deduplicated, cached, resilient stream of backend invocations
//!
//! # Design Decisions
//! - Each instance owns its cache, registry and admission gate; no
//!   global state, lifetime ends when the instance is dropped
//! - Cache lookups never touch the admission gate or the executor
//! - Registry bookkeeping happens under a short lock; execution does not

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use futures_util::FutureExt;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::config::schema::{MultiplexerConfig, RetryConfig};
use crate::mux::cache::ResultCache;
use crate::mux::inflight::InflightRegistry;
use crate::mux::key::CallKey;
use crate::mux::types::{CallError, CallRequest, Executor};
use crate::observability::metrics;
use crate::resilience::retry;

/// Client-side orchestration layer between application code and a
/// backend call interface.
///
/// Identical concurrent calls share one execution, recent successes are
/// served from a TTL cache, at most `max_concurrency` executors run at
/// once, and each execution is retried with exponential backoff under a
/// per-attempt deadline.
#[derive(Debug)]
pub struct CallMultiplexer {
    cache: Arc<ResultCache>,
    inflight: Arc<InflightRegistry>,
    limiter: Arc<Semaphore>,
    policy: RetryConfig,
    attempt_timeout: Duration,
}

impl CallMultiplexer {
    pub fn new(config: MultiplexerConfig) -> Self {
        Self {
            cache: Arc::new(ResultCache::new(Duration::from_millis(config.cache_ttl_ms))),
            inflight: Arc::new(InflightRegistry::new()),
            limiter: Arc::new(Semaphore::new(config.max_concurrency)),
            policy: config.retries,
            attempt_timeout: Duration::from_millis(config.attempt_timeout_ms),
        }
    }

    /// Dispatch one call.
    ///
    /// In order: a live cache entry is returned immediately; an existing
    /// in-flight computation for the same key is awaited instead of
    /// starting a new one; otherwise a new computation is registered,
    /// admitted through the concurrency limiter, and run under the retry
    /// policy. Successes are cached for the configured TTL; failures are
    /// not. Every caller coalesced onto one computation observes the
    /// identical outcome.
    pub async fn call(
        &self,
        method: &str,
        params: Value,
        executor: Arc<dyn Executor>,
    ) -> Result<Value, CallError> {
        let key = CallKey::new(method, &params);

        if let Some(value) = self.cache.get(&key) {
            tracing::debug!(method, "cache hit");
            return Ok(value);
        }

        let (outcome, created) = self.inflight.join_or_register(&key, || {
            let cache = Arc::clone(&self.cache);
            let inflight = Arc::clone(&self.inflight);
            let limiter = Arc::clone(&self.limiter);
            let policy = self.policy.clone();
            let attempt_timeout = self.attempt_timeout;
            let key = key.clone();
            let method = method.to_owned();
            async move {
                let result = if let Some(value) = cache.get(&key) {
                    // Lost a race against a computation that settled between
                    // our cache miss and registration; its entry is fresh.
                    Ok(value)
                } else {
                    let _permit = limiter
                        .acquire_owned()
                        .await
                        .expect("admission gate is never closed");
                    let result = retry::execute_with_retry(
                        &policy,
                        attempt_timeout,
                        &method,
                        &params,
                        executor.as_ref(),
                    )
                    .await;
                    if let Ok(value) = &result {
                        cache.insert(key.clone(), value.clone());
                    }
                    result
                };
                metrics::record_call_outcome(if result.is_ok() {
                    "fulfilled"
                } else {
                    "rejected"
                });
                // Cache insert precedes settlement, so a racer either joins
                // this computation or finds the fresh entry; it never
                // re-executes.
                inflight.settle(&key);
                result
            }
            .boxed()
            .shared()
        });

        if !created {
            metrics::record_coalesced();
            tracing::debug!(method, "joining in-flight call");
        }
        outcome.await
    }

    /// Dispatch every entry concurrently and wait for all of them to
    /// settle. Outcomes come back in input order, one per entry; a
    /// failing entry never cancels or fails its siblings.
    pub async fn batch(
        &self,
        calls: Vec<CallRequest>,
        executor: Arc<dyn Executor>,
    ) -> Vec<Result<Value, CallError>> {
        let dispatched = calls.into_iter().map(|request| {
            let executor = Arc::clone(&executor);
            async move {
                let CallRequest { method, params } = request;
                self.call(&method, params, executor).await
            }
        });
        join_all(dispatched).await
    }
}
