//! Application errors.

use macrolens_core::CatalogError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything a CLI command can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog, config or snapshot rejected by the engine.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
