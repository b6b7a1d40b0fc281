//! Biblio - book vibes and bookseller chat
//!
//! Rule-based classification and response generation for a conversational
//! book recommender, with optional mood analysis collaborators.

pub mod collaborators;
pub mod engine;
pub mod error;
pub mod intelligence;
pub mod server;
pub mod types;

pub use engine::BookEngine;
pub use error::{BiblioError, CollaboratorError, Result};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
