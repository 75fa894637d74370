//! Configuration loader for overrides, `.env` files, and environment variables.
//!
//! Responsibilities:
//! - Locate and parse an optional `.env` file into a key/value mapping.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Validate the merged result into an immutable `Config`.
//!
//! Does NOT handle:
//! - Watching files or reloading configuration after startup.
//! - Installing a tracing subscriber (the hosting service owns that).
//!
//! Invariants / Assumptions:
//! - `.env` values take precedence over environment variables, which take
//!   precedence over builder overrides.
//! - The process environment is only read, never written.

mod builder;
mod dotenv;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use dotenv::{EnvFile, EnvFileLoader, find_env_file};
pub use env::{EnvSource, ProcessEnv, env_var_or_none, lookup_non_empty};
pub use error::{ConfigError, LoadError};
