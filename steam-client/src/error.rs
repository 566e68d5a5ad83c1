//! Error types for steam-client.
//!
//! Only loading can fail on the Rust side. Once the library is bound,
//! every call reports what the native SDK reports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading and binding the native library.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The platform loader refused the library.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path handed to the loader.
        path: PathBuf,
        /// Loader error.
        source: libloading::Error,
    },

    /// The library does not export a symbol the binding requires.
    #[error("missing symbol {symbol}: {source}")]
    MissingSymbol {
        /// Exact export name that failed to resolve.
        symbol: &'static str,
        /// Loader error.
        source: libloading::Error,
    },
}

impl LoadError {
    /// The export name behind a [`LoadError::MissingSymbol`].
    pub fn missing_symbol(&self) -> Option<&'static str> {
        match self {
            LoadError::MissingSymbol { symbol, .. } => Some(symbol),
            LoadError::Open { .. } => None,
        }
    }
}
