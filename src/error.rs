//! Error types for the php-enum-gen crate.

use std::path::PathBuf;

/// Errors that can occur while generating PHP enum classes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The schema document could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema document is not well-formed, or ends before a complete document.
    #[error("failed to decode schema document: {0}")]
    Decode(#[from] serde_json::Error),

    /// An enum's fully-qualified name cannot be split into a class identity.
    #[error("invalid enum name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Failed to create an output directory or write a generated class.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A class template is missing a slot or repeats one.
    #[error("template error: {0}")]
    Template(String),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
