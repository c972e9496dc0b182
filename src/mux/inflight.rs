//! In-flight registry: one shared computation per call key.
//!
//! # Responsibilities
//! - Hold the single active computation for each key
//! - Make the decide-to-start / register window atomic across callers
//!
//! # Design Decisions
//! - std `Mutex` around a plain `HashMap`; held only for bookkeeping,
//!   never across an await point
//! - The computation is a `Shared` future: every waiter clones the same
//!   settled outcome, success and failure alike
//! - An entry is removed exactly once, by the computation that created it

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use futures_util::future::{BoxFuture, Shared};
use serde_json::Value;

use crate::mux::key::CallKey;
use crate::mux::types::CallError;

/// The one active attempt sequence for a key, awaitable by many callers.
pub type SharedOutcome = Shared<BoxFuture<'static, Result<Value, CallError>>>;

#[derive(Default)]
pub struct InflightRegistry {
    entries: Mutex<HashMap<CallKey, SharedOutcome>>,
}

impl InflightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the computation already registered for `key`, or register the
    /// one produced by `make`. The boolean is true when a new computation
    /// was registered, i.e. the caller is the one driving execution.
    pub fn join_or_register(
        &self,
        key: &CallKey,
        make: impl FnOnce() -> SharedOutcome,
    ) -> (SharedOutcome, bool) {
        let mut entries = self.entries.lock().unwrap();
        match entries.entry(key.clone()) {
            Entry::Occupied(occupied) => (occupied.get().clone(), false),
            Entry::Vacant(vacant) => {
                let outcome = make();
                vacant.insert(outcome.clone());
                (outcome, true)
            }
        }
    }

    /// Drop the entry for a settled computation.
    pub fn settle(&self, key: &CallKey) {
        self.entries.lock().unwrap().remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for InflightRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InflightRegistry")
            .field("entries", &self.len())
            .finish()
    }
}
