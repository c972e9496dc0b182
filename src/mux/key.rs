//! Call identity derivation.
//!
//! # Responsibilities
//! - Derive a deterministic key from (method, params)
//! - Guarantee structurally equal params collide regardless of map key order
//!
//! # Design Decisions
//! - Params are serialized through `serde_json`, whose object maps are
//!   BTreeMap-backed, so the serialized form is canonical (sorted keys).
//!   Two structurally equal parameter values always produce equal keys.

use serde_json::Value;

/// Deterministic identity of a logical call, used for dedup and caching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallKey {
    method: String,
    params: String,
}

impl CallKey {
    pub fn new(method: &str, params: &Value) -> Self {
        Self {
            method: method.to_owned(),
            params: params.to_string(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}
