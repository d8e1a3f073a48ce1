//! Error types for document operations

use std::fmt;

/// Errors that can occur while reading a document
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The metadata header block could not be parsed
    Split(String),
    /// The header parsed, but not into the requested type
    Attributes(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Split(msg) => write!(f, "Invalid front matter: {msg}"),
            DocumentError::Attributes(msg) => write!(f, "Invalid front matter attributes: {msg}"),
        }
    }
}

impl std::error::Error for DocumentError {}
