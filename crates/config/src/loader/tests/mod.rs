//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test precedence between `.env`, environment, and builder overrides.
//! - Test `.env` discovery and load failures.
//! - Test required-field validation and debug flag fallback.
//! - Test the process-environment entry point (`build()`).
//!
//! Invariants:
//! - Tests inject a `BTreeMap` environment unless they exercise `ProcessEnv`.
//! - Tests that touch the real process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an injected environment from key/value pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Environment carrying both required fields.
pub fn required_env() -> BTreeMap<String, String> {
    env_of(&[
        ("DATABASE_URL", "postgres://env-db"),
        ("AUTH_SERVICE_URL", "http://env-auth"),
    ])
}

/// Write a `.env` file into `dir` and return its path.
pub fn write_env_file(dir: &Path, contents: &str) -> std::path::PathBuf {
    let path = dir.join(".env");
    std::fs::write(&path, contents).unwrap();
    path
}
