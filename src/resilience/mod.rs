//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! In-flight computation:
//!     → timeout.rs (bound each attempt, cancel on deadline)
//!     → On failure: retry.rs (backoff.rs delay, then re-attempt)
//!     → Terminal failure surfaces once, to every coalesced caller
//! ```
//!
//! # Design Decisions
//! - Every executor attempt has a deadline; no unbounded waits
//! - Backoff is pure exponential so delay schedules stay predictable
//! - Retries wrap only fresh executions, never cache hits or
//!   piggy-backed waits

pub mod backoff;
pub mod retry;
pub mod timeout;
