//! Errors raised while loading a single content file

use std::path::PathBuf;
use thiserror::Error;

/// Why a post could not be loaded.
///
/// These never leave the loader's query operations: lookups turn them into
/// `None` and listings skip the offending file.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("No content file for '{0}'")]
    NotFound(String),

    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter: {0}")]
    FrontMatter(String),

    #[error("Missing required front-matter field '{0}'")]
    MissingField(&'static str),
}

impl ContentError {
    /// Whether the error means "nothing there" rather than "something broken"
    pub fn is_not_found(&self) -> bool {
        match self {
            ContentError::NotFound(_) | ContentError::InvalidIdentifier(_) => true,
            ContentError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
