//! Content errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or rendering posts
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to render {path:?}: {message}")]
    Markdown { path: PathBuf, message: String },

    #[error("invalid post id: {0:?}")]
    InvalidId(String),

    #[error("post not found: {0}")]
    PostNotFound(String),
}

impl ContentError {
    /// Whether the error means the requested post does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_) | Self::InvalidId(_))
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
