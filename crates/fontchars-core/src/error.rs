//! Error types for fontchars

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontCharsError>;

/// Main error type for fontchars
#[derive(Debug, Error)]
pub enum FontCharsError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Font has no '{0}' table")]
    MissingTable(&'static str),
}
