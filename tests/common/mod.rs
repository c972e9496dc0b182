//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use callmux::{BoxError, Executor};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Executor that counts invocations and returns `{"count": n}`.
pub struct CountingExecutor {
    calls: AtomicU32,
    delay: Duration,
}

#[allow(dead_code)]
impl CountingExecutor {
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Simulate backend latency so executions stay observable in flight.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            calls: AtomicU32::new(0),
            delay,
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for CountingExecutor {
    fn execute<'a>(
        &'a self,
        _method: &'a str,
        _params: &'a Value,
        _cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let delay = self.delay;
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(json!({ "count": n }))
        }
        .boxed()
    }
}

/// Executor that fails the first `failures` invocations, then succeeds.
pub struct FlakyExecutor {
    calls: AtomicU32,
    failures: u32,
}

#[allow(dead_code)]
impl FlakyExecutor {
    pub fn failing_first(failures: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            failures,
        }
    }

    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for FlakyExecutor {
    fn execute<'a>(
        &'a self,
        _method: &'a str,
        _params: &'a Value,
        _cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let failures = self.failures;
        async move {
            if n <= failures {
                Err(format!("transient failure {n}").into())
            } else {
                Ok(json!({ "attempt": n }))
            }
        }
        .boxed()
    }
}

/// Executor that never settles on its own; attempts end via the
/// per-attempt deadline.
pub struct HangingExecutor {
    calls: AtomicU32,
}

#[allow(dead_code)]
impl HangingExecutor {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for HangingExecutor {
    fn execute<'a>(
        &'a self,
        _method: &'a str,
        _params: &'a Value,
        _cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(json!("too late"))
        }
        .boxed()
    }
}

/// Executor that tracks how many invocations run simultaneously.
pub struct ConcurrencyProbe {
    current: AtomicU32,
    peak: AtomicU32,
    calls: AtomicU32,
    delay: Duration,
}

#[allow(dead_code)]
impl ConcurrencyProbe {
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            current: AtomicU32::new(0),
            peak: AtomicU32::new(0),
            calls: AtomicU32::new(0),
            delay,
        }
    }

    pub fn peak(&self) -> u32 {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Executor for ConcurrencyProbe {
    fn execute<'a>(
        &'a self,
        _method: &'a str,
        _params: &'a Value,
        _cancel: CancellationToken,
    ) -> BoxFuture<'a, Result<Value, BoxError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async move {
            let running = self.current.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(running, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.current.fetch_sub(1, Ordering::SeqCst);
            Ok(json!({}))
        }
        .boxed()
    }
}
