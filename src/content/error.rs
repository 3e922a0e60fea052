//! Content pipeline errors

use std::path::PathBuf;
use thiserror::Error;

use super::frontmatter::FrontMatterError;

/// Errors raised while loading content.
///
/// A missing file is never one of these: resolution misses are `None` and
/// degrade to the not-found document.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Failed to list content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Front-matter does not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn front_matter(path: impl Into<PathBuf>, source: FrontMatterError) -> Self {
        Self::FrontMatter {
            path: path.into(),
            source,
        }
    }
}
