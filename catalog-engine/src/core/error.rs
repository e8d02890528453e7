use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring the engine or loading catalog data
///
/// Filtering itself never fails; an unresolvable selection is an empty listing.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
