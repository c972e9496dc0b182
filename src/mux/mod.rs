//! Call multiplexing subsystem.
//!
//! # Data Flow
//! ```text
//! call(method, params, executor)
//!     → key.rs (derive call identity)
//!     → cache.rs (live entry? return immediately)
//!     → inflight.rs (computation running? await the same outcome)
//!     → multiplexer.rs (register computation, acquire admission slot)
//!     → resilience (per-attempt timeout + retry with backoff)
//!     → success cached, entry settled, outcome broadcast to all waiters
//! ```
//!
//! # Design Decisions
//! - At most one executor invocation sequence per key at any instant
//! - Only successes are cached; failures propagate to every waiter
//! - Cache reads never wait on the limiter or the executor

pub mod cache;
pub mod inflight;
pub mod key;
pub mod multiplexer;
pub mod types;

pub use key::CallKey;
pub use multiplexer::CallMultiplexer;
pub use types::{executor_fn, BoxError, CallError, CallRequest, Executor, ExecutorFn};
