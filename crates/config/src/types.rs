//! Configuration types for service processes.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{
    AUTH_SERVICE_URL_KEY, DATABASE_URL_KEY, DEBUG_KEY, GOOGLE_CLIENT_ID_KEY,
    GOOGLE_CLIENT_SECRET_KEY, PORT_KEY,
};

/// A configurable field, identified by the key it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    DatabaseUrl,
    AuthServiceUrl,
    Debug,
    Port,
    GoogleClientId,
    GoogleClientSecret,
}

impl Field {
    /// All fields, in resolution order.
    pub const ALL: [Field; 6] = [
        Field::DatabaseUrl,
        Field::AuthServiceUrl,
        Field::Debug,
        Field::Port,
        Field::GoogleClientId,
        Field::GoogleClientSecret,
    ];

    /// Fields that must resolve to a non-empty value, in validation order.
    pub const REQUIRED: [Field; 2] = [Field::DatabaseUrl, Field::AuthServiceUrl];

    /// Key looked up in both the `.env` file and the process environment.
    pub fn env_key(self) -> &'static str {
        match self {
            Field::DatabaseUrl => DATABASE_URL_KEY,
            Field::AuthServiceUrl => AUTH_SERVICE_URL_KEY,
            Field::Debug => DEBUG_KEY,
            Field::Port => PORT_KEY,
            Field::GoogleClientId => GOOGLE_CLIENT_ID_KEY,
            Field::GoogleClientSecret => GOOGLE_CLIENT_SECRET_KEY,
        }
    }

    /// Human-readable name for log and error surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Field::DatabaseUrl => "database URL",
            Field::AuthServiceUrl => "auth service URL",
            Field::Debug => "debug flag",
            Field::Port => "port",
            Field::GoogleClientId => "Google client ID",
            Field::GoogleClientSecret => "Google client secret",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_key())
    }
}

/// Fully resolved service configuration.
///
/// Built by [`crate::ConfigLoader`]. Fields are read-only once constructed;
/// `database_url` and `auth_service_url` are guaranteed non-empty.
#[derive(Clone)]
pub struct Config {
    pub(crate) database_url: String,
    pub(crate) auth_service_url: String,
    pub(crate) debug: bool,
    pub(crate) port: String,
    pub(crate) google_client_id: String,
    pub(crate) google_client_secret: SecretString,
    pub(crate) env_file: Option<PathBuf>,
}

impl Config {
    /// Database connection string.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Base URL of the authentication service.
    pub fn auth_service_url(&self) -> &str {
        &self.auth_service_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Raw port value; empty when no source provided one.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Port parsed as a TCP port number.
    ///
    /// Returns `None` when the port is unset or not a valid `u16`.
    pub fn port_number(&self) -> Option<u16> {
        self.port.parse().ok()
    }

    pub fn google_client_id(&self) -> &str {
        &self.google_client_id
    }

    /// Google OAuth client secret. Use `expose_secret()` at the point of use.
    pub fn google_client_secret(&self) -> &SecretString {
        &self.google_client_secret
    }

    /// The `.env` file that contributed values, if one was found.
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.database_url == other.database_url
            && self.auth_service_url == other.auth_service_url
            && self.debug == other.debug
            && self.port == other.port
            && self.google_client_id == other.google_client_id
            && self.google_client_secret.expose_secret()
                == other.google_client_secret.expose_secret()
            && self.env_file == other.env_file
    }
}

impl Eq for Config {}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secret = if self.google_client_secret.expose_secret().is_empty() {
            ""
        } else {
            "[REDACTED]"
        };
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("auth_service_url", &self.auth_service_url)
            .field("debug", &self.debug)
            .field("port", &self.port)
            .field("google_client_id", &self.google_client_id)
            .field("google_client_secret", &secret)
            .field("env_file", &self.env_file)
            .finish()
    }
}
