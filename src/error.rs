//! Error types for Biblio

use thiserror::Error;

/// Result type alias for Biblio operations
pub type Result<T> = std::result::Result<T, BiblioError>;

/// Main error type for Biblio
///
/// Only construction paths (loading a catalog, reading config) surface this.
/// The engine operations themselves are total and never return it.
#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),
}

/// Outcome of a failed call into an optional analysis collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The collaborator was not loaded at startup
    #[error("collaborator unavailable")]
    Unavailable,

    /// The collaborator has nothing for this book
    #[error("no entry for '{title}' by '{author}'")]
    NotFound { title: String, author: String },

    /// The collaborator ran and reported a failure
    #[error("collaborator failed: {0}")]
    Failed(String),

    /// The collaborator panicked during the call
    #[error("collaborator panicked: {0}")]
    Panicked(String),
}

impl CollaboratorError {
    /// Whether the failure came from a loaded collaborator (as opposed to it being absent)
    pub fn is_failure(&self) -> bool {
        !matches!(self, CollaboratorError::Unavailable)
    }

    /// Short machine-readable kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            CollaboratorError::Unavailable => "unavailable",
            CollaboratorError::NotFound { .. } => "not_found",
            CollaboratorError::Failed(_) => "failed",
            CollaboratorError::Panicked(_) => "panicked",
        }
    }
}
