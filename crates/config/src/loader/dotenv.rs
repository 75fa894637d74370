//! `.env` file discovery and parsing.
//!
//! Responsibilities:
//! - Resolve which `.env` file to read (explicit path, `ENV_FILE`, upward search).
//! - Parse the file into a key/value mapping without touching the process environment.
//!
//! Does NOT handle:
//! - Precedence between the file and other sources (see builder.rs).
//!
//! Invariants:
//! - A missing file yields an empty mapping and a warning, never an error.
//! - The upward search only runs from an explicitly supplied search root.
//! - Errors never include raw .env line contents to prevent secret leakage.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::env::{EnvSource, lookup_non_empty};
use super::error::LoadError;
use crate::constants::{DOTENV_FILE_NAME, ENV_FILE_KEY};

/// Values read from a `.env` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl EnvFile {
    /// Path the values were read from; `None` when no file was loaded.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Raw value for `key` as written in the file.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> BTreeMap<String, String> {
        self.values
    }
}

/// Locates and reads an optional `.env` file.
#[derive(Debug, Clone, Default)]
pub struct EnvFileLoader {
    path_hint: Option<PathBuf>,
    search_root: Option<PathBuf>,
}

impl EnvFileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file instead of consulting `ENV_FILE` or searching.
    ///
    /// An empty path is ignored.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.as_os_str().is_empty() {
            self.path_hint = Some(path);
        }
        self
    }

    /// Directory where the upward search for `.env` starts.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if !root.as_os_str().is_empty() {
            self.search_root = Some(root);
        }
        self
    }

    /// Resolve the file path: explicit hint, then `ENV_FILE`, then upward search.
    pub fn resolve_path(&self, env: &impl EnvSource) -> Option<PathBuf> {
        if let Some(path) = &self.path_hint {
            return Some(path.clone());
        }
        if let Some(path) = lookup_non_empty(env, ENV_FILE_KEY) {
            return Some(PathBuf::from(path));
        }
        self.search_root.as_deref().and_then(find_env_file)
    }

    /// Load the `.env` mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but has invalid syntax (`LoadError::Parse`)
    /// - The file exists but cannot be read due to I/O errors (`LoadError::Io`)
    ///
    /// A missing file logs a warning and returns an empty mapping.
    pub fn load(&self, env: &impl EnvSource) -> Result<EnvFile, LoadError> {
        let Some(path) = self.resolve_path(env) else {
            tracing::warn!("No .env file found, using only environment variables");
            return Ok(EnvFile::default());
        };

        let iter = match dotenvy::from_path_iter(&path) {
            Ok(iter) => iter,
            Err(e) if is_not_found(&e) => {
                tracing::warn!(
                    path = %path.display(),
                    ".env file not found, using only environment variables"
                );
                return Ok(EnvFile::default());
            }
            Err(e) => return Err(map_dotenv_error(e, path)),
        };

        let mut values = BTreeMap::new();
        for item in iter {
            let (key, value) = item.map_err(|e| map_dotenv_error(e, path.clone()))?;
            values.insert(key, value);
        }

        tracing::debug!(path = %path.display(), entries = values.len(), "Loaded .env file");
        Ok(EnvFile {
            path: Some(path),
            values,
        })
    }
}

/// Search `start` and its ancestors for a `.env` file, stopping at the filesystem root.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == ErrorKind::NotFound
    )
}

fn map_dotenv_error(err: dotenvy::Error, path: PathBuf) -> LoadError {
    match err {
        dotenvy::Error::LineParse(_, error_index) => LoadError::Parse { path, error_index },
        dotenvy::Error::Io(source) => LoadError::Io { path, source },
        _ => LoadError::Unknown { path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::with_captured_logs;
    use std::fs;
    use tempfile::TempDir;

    fn no_env() -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    #[test]
    fn test_find_env_file_walks_up_to_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join("a").join(".env"), "PORT=1\n").unwrap();

        let found = find_env_file(&nested).expect("should find ancestor .env");
        assert_eq!(found, temp_dir.path().join("a").join(".env"));
    }

    #[test]
    fn test_find_env_file_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("svc");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(".env"), "PORT=1\n").unwrap();
        fs::write(nested.join(".env"), "PORT=2\n").unwrap();

        assert_eq!(find_env_file(&nested), Some(nested.join(".env")));
    }

    #[test]
    fn test_find_env_file_ignores_directories_named_env() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("svc");
        fs::create_dir_all(nested.join(".env")).unwrap();
        fs::write(temp_dir.path().join(".env"), "PORT=1\n").unwrap();

        assert_eq!(find_env_file(&nested), Some(temp_dir.path().join(".env")));
    }

    #[test]
    fn test_explicit_path_wins_over_env_file_variable() {
        let mut env = no_env();
        env.insert(ENV_FILE_KEY.to_string(), "/from/env".to_string());

        let loader = EnvFileLoader::new().with_path("/explicit/.env");
        assert_eq!(
            loader.resolve_path(&env),
            Some(PathBuf::from("/explicit/.env"))
        );
    }

    #[test]
    fn test_env_file_variable_wins_over_search() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".env"), "PORT=1\n").unwrap();

        let mut env = no_env();
        env.insert(ENV_FILE_KEY.to_string(), "/from/env".to_string());

        let loader = EnvFileLoader::new().with_search_root(temp_dir.path());
        assert_eq!(loader.resolve_path(&env), Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn test_empty_hints_are_ignored() {
        let mut env = no_env();
        env.insert(ENV_FILE_KEY.to_string(), String::new());

        let loader = EnvFileLoader::new().with_path("").with_search_root("");
        assert_eq!(loader.resolve_path(&env), None);
    }

    #[test]
    fn test_load_without_any_path_is_empty_and_warns() {
        let (result, logs) = with_captured_logs(|| EnvFileLoader::new().load(&no_env()));

        let loaded = result.unwrap();
        assert!(loaded.is_empty());
        assert!(loaded.path().is_none());
        let warning = logs
            .lines()
            .find(|line| line.contains("WARN"))
            .unwrap_or_else(|| panic!("expected a warning, got: {logs}"));
        assert!(
            warning.contains("No .env file found") && warning.contains("only environment variables"),
            "unexpected warning: {warning}"
        );
    }

    #[test]
    fn test_missing_file_under_search_root_is_empty_and_warns() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("svc").join(DOTENV_FILE_NAME);

        let (result, logs) = with_captured_logs(|| {
            EnvFileLoader::new()
                .with_path(&missing)
                .with_search_root(temp_dir.path())
                .load(&no_env())
        });

        let loaded = result.unwrap();
        assert!(loaded.is_empty());
        assert!(loaded.path().is_none());
        let warning = logs
            .lines()
            .find(|line| line.contains("WARN"))
            .unwrap_or_else(|| panic!("expected a warning, got: {logs}"));
        assert!(
            warning.contains("not found") && warning.contains("only environment variables"),
            "unexpected warning: {warning}"
        );
    }

    #[test]
    fn test_quoted_padding_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DOTENV_FILE_NAME);
        fs::write(&path, "GOOGLE_CLIENT_SECRET=\" pad secret \"\n").unwrap();

        let loaded = EnvFileLoader::new().with_path(&path).load(&no_env()).unwrap();
        assert_eq!(loaded.get("GOOGLE_CLIENT_SECRET"), Some(" pad secret "));
    }

    #[test]
    fn test_load_reads_values_without_touching_process_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.env");
        fs::write(
            &path,
            "# comment\n_SERVICE_CONFIG_DOTENV_ONLY=from-file\nPORT=\"9000\"\n",
        )
        .unwrap();

        let loaded = EnvFileLoader::new().with_path(&path).load(&no_env()).unwrap();
        assert_eq!(loaded.path(), Some(path.as_path()));
        assert_eq!(loaded.get("_SERVICE_CONFIG_DOTENV_ONLY"), Some("from-file"));
        assert_eq!(loaded.get("PORT"), Some("9000"));
        assert_eq!(loaded.len(), 2);
        assert!(std::env::var("_SERVICE_CONFIG_DOTENV_ONLY").is_err());
    }
}
