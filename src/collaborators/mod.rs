//! Optional analysis collaborators
//!
//! The engine can consult richer mood analysis when it is available:
//! - [`MoodTagSource`]: mood tags for a title/author
//! - [`EnhancedNoteGenerator`]: a richer book note
//!
//! Both are injected as a [`Capability`], which is either `Available` or
//! `Unavailable` and is decided once when the engine is built. Calls through
//! a capability turn panics into [`CollaboratorError::Panicked`], so a
//! misbehaving collaborator can only ever produce an `Err`.

mod catalog;

pub use catalog::{CatalogEntry, MoodCatalog};

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::CollaboratorError;
use crate::types::{Availability, MoodTagList, Vibe};

/// Source of mood tags for a book
pub trait MoodTagSource: Send + Sync {
    /// Mood tags for the given book; `author` may be empty
    fn get_tags(&self, title: &str, author: &str) -> Result<MoodTagList, CollaboratorError>;

    /// Name used in diagnostics
    fn name(&self) -> &str;
}

/// Generator of richer book notes
pub trait EnhancedNoteGenerator: Send + Sync {
    /// A note for the book described by `description`, `title` and `author`
    fn generate(
        &self,
        description: &str,
        title: &str,
        author: &str,
    ) -> Result<Vibe, CollaboratorError>;

    /// Name used in diagnostics
    fn name(&self) -> &str;
}

/// An optional collaborator, resolved once at construction
pub enum Capability<T: ?Sized> {
    Available(Arc<T>),
    Unavailable,
}

impl<T: ?Sized> Capability<T> {
    pub fn available(inner: Arc<T>) -> Self {
        Capability::Available(inner)
    }

    pub fn availability(&self) -> Availability {
        match self {
            Capability::Available(_) => Availability::Available,
            Capability::Unavailable => Availability::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability().is_available()
    }

    /// Borrow the collaborator if it is loaded
    pub fn get(&self) -> Option<&T> {
        match self {
            Capability::Available(inner) => Some(inner.as_ref()),
            Capability::Unavailable => None,
        }
    }

    /// Make a single call into the collaborator
    ///
    /// Returns `Unavailable` without calling anything when the collaborator
    /// is absent. A panic inside `f` is caught and reported as `Panicked`.
    pub fn call<R>(
        &self,
        f: impl FnOnce(&T) -> Result<R, CollaboratorError>,
    ) -> Result<R, CollaboratorError> {
        let inner = self.get().ok_or(CollaboratorError::Unavailable)?;
        match panic::catch_unwind(AssertUnwindSafe(|| f(inner))) {
            Ok(result) => result,
            Err(payload) => Err(CollaboratorError::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

impl<T: ?Sized> Clone for Capability<T> {
    fn clone(&self) -> Self {
        match self {
            Capability::Available(inner) => Capability::Available(Arc::clone(inner)),
            Capability::Unavailable => Capability::Unavailable,
        }
    }
}

impl<T: ?Sized> Default for Capability<T> {
    fn default() -> Self {
        Capability::Unavailable
    }
}

impl<T: ?Sized> fmt::Debug for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available(_) => f.write_str("Capability::Available"),
            Capability::Unavailable => f.write_str("Capability::Unavailable"),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
