//! Book Notes
//!
//! Produces a one-sentence "vibe" for a book description. A loaded
//! [`EnhancedNoteGenerator`] is tried first when title and author are both
//! known; otherwise, or when it fails, a fixed fallback ladder decides.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::collaborators::{Capability, EnhancedNoteGenerator};
use crate::error::CollaboratorError;
use crate::types::{BookIdentity, Vibe};

/// Descriptions longer than this (in characters) read as deep and complex
pub const DEEP_DESCRIPTION_CHARS: usize = 200;

/// Descriptions longer than this (in characters) read as layered
pub const LAYERED_DESCRIPTION_CHARS: usize = 100;

/// A rung of the deterministic fallback ladder, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackRung {
    /// More than 200 characters
    Deep,
    /// More than 100 characters
    Layered,
    /// Mentions "mystery"
    Mystery,
    /// Mentions "romance"
    Romance,
    /// Nothing else matched
    Default,
}

impl FallbackRung {
    pub const ALL: [FallbackRung; 5] = [
        FallbackRung::Deep,
        FallbackRung::Layered,
        FallbackRung::Mystery,
        FallbackRung::Romance,
        FallbackRung::Default,
    ];

    /// First rung matching the description
    pub fn for_description(description: &str) -> Self {
        let length = description.chars().count();
        if length > DEEP_DESCRIPTION_CHARS {
            return FallbackRung::Deep;
        }
        if length > LAYERED_DESCRIPTION_CHARS {
            return FallbackRung::Layered;
        }

        let lower = description.to_lowercase();
        if lower.contains("mystery") {
            FallbackRung::Mystery
        } else if lower.contains("romance") {
            FallbackRung::Romance
        } else {
            FallbackRung::Default
        }
    }

    pub fn note(self) -> &'static str {
        match self {
            FallbackRung::Deep => {
                "A deep, complex narrative that readers find emotionally resonant."
            }
            FallbackRung::Layered => "A compelling story with layers waiting to be discovered.",
            FallbackRung::Mystery => "A mysterious tale that will keep you guessing.",
            FallbackRung::Romance => "A heartwarming story perfect for cozy reading.",
            FallbackRung::Default => "A delightful read for any quiet moment.",
        }
    }
}

/// Where a note came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "rung")]
pub enum NoteSource {
    Enhanced,
    Fallback(FallbackRung),
}

/// A generated note plus how it was produced
#[derive(Debug, Clone, PartialEq)]
pub struct NoteOutcome {
    pub vibe: Vibe,
    pub source: NoteSource,
    /// Why the enhanced path was not used, if it was attempted or skipped
    pub enhanced_error: Option<CollaboratorError>,
}

/// Generates book notes
#[derive(Debug, Clone, Default)]
pub struct BookNoteGenerator {
    enhanced: Capability<dyn EnhancedNoteGenerator>,
}

impl BookNoteGenerator {
    pub fn new(enhanced: Capability<dyn EnhancedNoteGenerator>) -> Self {
        Self { enhanced }
    }

    /// Generator that only uses the fallback ladder
    pub fn fallback_only() -> Self {
        Self::default()
    }

    pub fn is_enhanced_available(&self) -> bool {
        self.enhanced.is_available()
    }

    /// The vibe for a description; never empty
    pub fn generate(&self, description: &str, title: Option<&str>, author: Option<&str>) -> Vibe {
        self.generate_detailed(description, title, author).vibe
    }

    /// Like [`generate`](Self::generate), keeping the source and any swallowed error
    pub fn generate_detailed(
        &self,
        description: &str,
        title: Option<&str>,
        author: Option<&str>,
    ) -> NoteOutcome {
        let book = BookIdentity::new(title.unwrap_or_default(), author.unwrap_or_default());

        let enhanced_error = match self.try_enhanced(description, &book) {
            Ok(vibe) => {
                return NoteOutcome {
                    vibe,
                    source: NoteSource::Enhanced,
                    enhanced_error: None,
                }
            }
            Err(e) => {
                if e.is_failure() {
                    warn!(
                        title = %book.title,
                        author = %book.author,
                        error = %e,
                        kind = e.kind(),
                        "Enhanced note failed, using fallback"
                    );
                }
                e
            }
        };

        let rung = FallbackRung::for_description(description);
        debug!(?rung, "Fallback note selected");

        NoteOutcome {
            vibe: rung.note().to_string(),
            source: NoteSource::Fallback(rung),
            enhanced_error: Some(enhanced_error),
        }
    }

    /// One attempt at the enhanced path
    ///
    /// Reports `Unavailable` when the collaborator is absent or the book is
    /// missing a title or author. An empty note counts as a failure.
    pub fn try_enhanced(
        &self,
        description: &str,
        book: &BookIdentity,
    ) -> Result<Vibe, CollaboratorError> {
        if !book.is_complete() {
            return Err(CollaboratorError::Unavailable);
        }

        let vibe = self
            .enhanced
            .call(|g| g.generate(description, &book.title, &book.author))?;

        if vibe.is_empty() {
            return Err(CollaboratorError::Failed("empty note".to_string()));
        }
        Ok(vibe)
    }
}
