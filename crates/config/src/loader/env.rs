//! Environment variable lookup for configuration.
//!
//! Responsibilities:
//! - Model the process environment as an injected read-only lookup (`EnvSource`).
//! - Provide helper functions for reading values with empty-value filtering.
//!
//! Does NOT handle:
//! - `.env` file loading (see dotenv.rs).
//! - Precedence between sources (see builder.rs).
//!
//! Invariants:
//! - Empty values are treated as unset.
//! - Non-empty values are returned exactly as stored, whitespace included.
//! - Lookups never mutate the environment they read from.

use std::collections::{BTreeMap, HashMap};

/// Read-only key/value lookup standing in for the process environment.
pub trait EnvSource {
    /// Raw value for `key`, or `None` when unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Filter out empty values; anything else is kept verbatim.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Look up `key` in `env`, returning None if unset or empty.
pub fn lookup_non_empty(env: &impl EnvSource, key: &str) -> Option<String> {
    env.get(key).and_then(non_empty)
}

/// Read a process environment variable, returning None if unset or empty.
pub fn env_var_or_none(key: &str) -> Option<String> {
    lookup_non_empty(&ProcessEnv, key)
}
