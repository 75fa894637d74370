//! Configuration loading for service processes.
//!
//! This crate resolves a fixed set of runtime settings from builder overrides,
//! an optional `.env` file, and environment variables, and validates them into
//! a single immutable [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, EnvFile, EnvFileLoader, EnvSource, LoadError, ProcessEnv,
    env_var_or_none, find_env_file, lookup_non_empty,
};
pub use types::{Config, Field};
