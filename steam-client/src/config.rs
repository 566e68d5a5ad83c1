//! Loader configuration.
//!
//! Configuration is loaded from a TOML file (default: `steam.toml`).
//! Every section and key is optional.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::backend::library_file_name;

/// Environment variable naming the shared library to load.
pub const LIBRARY_ENV_VAR: &str = "STEAM_API_LIBRARY";

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SteamConfig {
    /// Shared library location.
    pub library: LibraryConfig,
    /// Application settings.
    pub app: AppConfig,
}

/// Shared library configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Path to `libsteam_api` (optional, falls back to the platform loader search).
    pub path: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Steam app id of the embedding application.
    pub id: Option<u32>,
    /// Call `SteamAPI_RestartAppIfNecessary` before init (default: false).
    pub restart_if_necessary: bool,
    /// Argument for `ISteamInput::Init` (default: false).
    pub explicitly_call_run_frame: bool,
}

impl SteamConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Pick the library to load.
    ///
    /// Order: `explicit` → `[library] path` → `env` value → the platform's
    /// SDK file name (resolved by the platform loader search path).
    pub fn resolve_library_path(&self, explicit: Option<&Path>, env: Option<OsString>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(ref path) = self.library.path {
            return path.clone();
        }
        match env {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => PathBuf::from(library_file_name()),
        }
    }

    /// [`resolve_library_path`](Self::resolve_library_path) reading
    /// [`LIBRARY_ENV_VAR`] from the process environment.
    pub fn library_path(&self, explicit: Option<&Path>) -> PathBuf {
        self.resolve_library_path(explicit, std::env::var_os(LIBRARY_ENV_VAR))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}
