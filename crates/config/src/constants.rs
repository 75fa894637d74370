//! Centralized constants for service configuration.
//!
//! Environment keys are shared between the `.env` file and the process
//! environment: the same key is looked up in both sources.

// =============================================================================
// Field Keys
// =============================================================================

/// Database connection string.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

/// Base URL of the authentication service.
pub const AUTH_SERVICE_URL_KEY: &str = "AUTH_SERVICE_URL";

/// Debug flag, parsed as a boolean.
pub const DEBUG_KEY: &str = "DEBUG";

/// Listening port, kept as the raw string.
pub const PORT_KEY: &str = "PORT";

/// Google OAuth client id.
pub const GOOGLE_CLIENT_ID_KEY: &str = "GOOGLE_CLIENT_ID";

/// Google OAuth client secret.
pub const GOOGLE_CLIENT_SECRET_KEY: &str = "GOOGLE_CLIENT_SECRET";

// =============================================================================
// Env File Discovery
// =============================================================================

/// Control variable naming an alternate `.env` file path.
pub const ENV_FILE_KEY: &str = "ENV_FILE";

/// File name looked for during the upward directory search.
pub const DOTENV_FILE_NAME: &str = ".env";
