//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Collect in-process overrides through named chained setters.
//! - Merge `.env` file values and environment values over the overrides.
//! - Validate required fields and build the final immutable `Config`.
//!
//! Does NOT handle:
//! - `.env` discovery and parsing (delegated to dotenv.rs).
//! - Environment access (delegated to the injected `EnvSource`, see env.rs).
//!
//! Invariants / Assumptions:
//! - `.env` file values take precedence over environment variables.
//! - Environment variables take precedence over builder overrides.
//! - Empty values from any source count as unset; other values are kept verbatim.
//! - A later setter call replaces an earlier one; an empty argument leaves it unchanged.
//! - An unparseable `DEBUG` value is ignored in favour of the override/default.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;

use super::dotenv::{EnvFile, EnvFileLoader};
use super::env::{EnvSource, ProcessEnv, lookup_non_empty, non_empty};
use super::error::ConfigError;
use crate::types::{Config, Field};

/// Configuration loader that builds config from overrides, `.env` and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    database_url: Option<String>,
    auth_service_url: Option<String>,
    debug: Option<bool>,
    port: Option<String>,
    google_client_id: Option<String>,
    google_client_secret: Option<SecretString>,
    env_files: EnvFileLoader,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    File,
    Env,
    Override,
    Unset,
}

impl ConfigLoader {
    /// Create a new configuration loader with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the database URL.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        set_if_present(&mut self.database_url, url.into());
        self
    }

    /// Set the auth service URL.
    pub fn with_auth_service_url(mut self, url: impl Into<String>) -> Self {
        set_if_present(&mut self.auth_service_url, url.into());
        self
    }

    /// Set the debug flag. Always takes effect.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        set_if_present(&mut self.port, port.into());
        self
    }

    /// Set the Google OAuth client id.
    pub fn with_google_client_id(mut self, client_id: impl Into<String>) -> Self {
        set_if_present(&mut self.google_client_id, client_id.into());
        self
    }

    /// Set the Google OAuth client secret.
    pub fn with_google_client_secret(mut self, secret: impl Into<String>) -> Self {
        if let Some(secret) = non_empty(secret.into()) {
            self.google_client_secret = Some(SecretString::new(secret.into()));
        }
        self
    }

    /// Read this `.env` file instead of consulting `ENV_FILE` or searching.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_files = self.env_files.with_path(path);
        self
    }

    /// Search this directory and its ancestors for `.env` when no file is named.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.env_files = self.env_files.with_search_root(root);
        self
    }

    /// The `.env` loader configured from this builder's hints.
    pub fn env_file_loader(&self) -> &EnvFileLoader {
        &self.env_files
    }

    /// Build the final configuration against the process environment.
    pub fn build(self) -> Result<Config, ConfigError> {
        self.build_with_env(&ProcessEnv)
    }

    /// Build the final configuration against an injected environment.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Load` if a `.env` file exists but cannot be read or parsed.
    /// - `ConfigError::MissingRequiredField` if `DATABASE_URL` or `AUTH_SERVICE_URL`
    ///   is empty after all sources are merged.
    pub fn build_with_env(self, env: &impl EnvSource) -> Result<Config, ConfigError> {
        let file = self.env_files.load(env)?;

        let database_url = resolve_string(Field::DatabaseUrl, &file, env, self.database_url);
        let auth_service_url =
            resolve_string(Field::AuthServiceUrl, &file, env, self.auth_service_url);
        let debug = resolve_bool(Field::Debug, &file, env, self.debug);
        let port = resolve_string(Field::Port, &file, env, self.port);
        let google_client_id =
            resolve_string(Field::GoogleClientId, &file, env, self.google_client_id);
        let google_client_secret = resolve_string(
            Field::GoogleClientSecret,
            &file,
            env,
            self.google_client_secret
                .map(|secret| secret.expose_secret().to_string()),
        );

        let config = Config {
            database_url,
            auth_service_url,
            debug,
            port,
            google_client_id,
            google_client_secret: SecretString::new(google_client_secret.into()),
            env_file: file.path().map(PathBuf::from),
        };

        validate(&config)?;
        Ok(config)
    }
}

fn set_if_present(slot: &mut Option<String>, value: String) {
    if let Some(value) = non_empty(value) {
        *slot = Some(value);
    }
}

/// Highest-precedence non-empty candidate: file, then environment.
fn lookup_sources(field: Field, file: &EnvFile, env: &impl EnvSource) -> Option<(String, Source)> {
    let key = field.env_key();
    if let Some(value) = file.get(key).filter(|v| !v.is_empty()) {
        return Some((value.to_string(), Source::File));
    }
    lookup_non_empty(env, key).map(|value| (value, Source::Env))
}

fn resolve_string(
    field: Field,
    file: &EnvFile,
    env: &impl EnvSource,
    fallback: Option<String>,
) -> String {
    let (value, source) = match lookup_sources(field, file, env) {
        Some(found) => found,
        None => match fallback {
            Some(value) => (value, Source::Override),
            None => (String::new(), Source::Unset),
        },
    };
    tracing::debug!(key = field.env_key(), source = ?source, "Resolved configuration value");
    value
}

fn resolve_bool(
    field: Field,
    file: &EnvFile,
    env: &impl EnvSource,
    override_value: Option<bool>,
) -> bool {
    let fallback = override_value.unwrap_or_default();
    let Some((raw, source)) = lookup_sources(field, file, env) else {
        let source = if override_value.is_some() {
            Source::Override
        } else {
            Source::Unset
        };
        tracing::debug!(key = field.env_key(), source = ?source, "Resolved configuration value");
        return fallback;
    };
    match parse_bool(&raw) {
        Some(value) => {
            tracing::debug!(key = field.env_key(), source = ?source, "Resolved configuration value");
            value
        }
        None => {
            tracing::warn!(
                key = field.env_key(),
                source = ?source,
                fallback,
                "Invalid boolean value, using fallback"
            );
            fallback
        }
    }
}

/// Parse a boolean, accepting `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    for field in Field::REQUIRED {
        let value = match field {
            Field::DatabaseUrl => config.database_url(),
            Field::AuthServiceUrl => config.auth_service_url(),
            _ => continue,
        };
        if value.is_empty() {
            return Err(ConfigError::MissingRequiredField { field });
        }
    }
    Ok(())
}
