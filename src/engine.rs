//! Book engine facade
//!
//! Bundles the note generator, mood tags, bookseller chat and query adapter
//! behind the four operations callers use. Collaborator availability is
//! decided once, when the engine is built.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::collaborators::{Capability, EnhancedNoteGenerator, MoodCatalog, MoodTagSource};
use crate::intelligence::{
    BookNoteGenerator, Bookseller, ChatIntentClassifier, IntentCategory, MoodTagProvider,
    NoteOutcome, RecommendationQueryAdapter,
};
use crate::types::{Availability, ChatTurn, EngineConfig, MoodTagList, Vibe};

/// Entry point for callers
#[derive(Debug, Clone, Default)]
pub struct BookEngine {
    notes: BookNoteGenerator,
    moods: MoodTagProvider,
    bookseller: Bookseller,
    queries: RecommendationQueryAdapter,
}

impl BookEngine {
    /// Engine without enhanced mood analysis
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit collaborators
    pub fn with_collaborators(
        mood_source: Capability<dyn MoodTagSource>,
        note_generator: Capability<dyn EnhancedNoteGenerator>,
    ) -> Self {
        if !mood_source.is_available() {
            debug!("Mood tag source unavailable");
        }
        if !note_generator.is_available() {
            debug!("Enhanced note generator unavailable, using fallback notes only");
        }

        Self {
            notes: BookNoteGenerator::new(note_generator),
            moods: MoodTagProvider::new(mood_source),
            ..Self::default()
        }
    }

    /// Engine configured from settings
    ///
    /// A missing or unloadable mood catalog leaves the collaborators
    /// unavailable; it is logged, never returned.
    pub fn from_config(config: &EngineConfig) -> Self {
        let catalog = match &config.mood_catalog_path {
            Some(path) => match MoodCatalog::load(path) {
                Ok(catalog) => Some(Arc::new(catalog)),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Mood catalog failed to load, mood analysis unavailable"
                    );
                    None
                }
            },
            None => None,
        };

        let (mood_source, note_generator) = match catalog {
            Some(catalog) => {
                let mood_source: Capability<dyn MoodTagSource> = if config.enable_mood_tags {
                    Capability::Available(catalog.clone())
                } else {
                    Capability::Unavailable
                };
                let note_generator: Capability<dyn EnhancedNoteGenerator> =
                    if config.enable_enhanced_notes {
                        Capability::Available(catalog)
                    } else {
                        Capability::Unavailable
                    };
                (mood_source, note_generator)
            }
            None => (Capability::Unavailable, Capability::Unavailable),
        };

        Self::with_collaborators(mood_source, note_generator)
    }

    /// Replace the chat rules
    pub fn with_classifier(mut self, classifier: ChatIntentClassifier) -> Self {
        self.bookseller = Bookseller::new(classifier);
        self
    }

    /// `Available` only when both collaborators were loaded
    pub fn mood_analysis(&self) -> Availability {
        if self.notes.is_enhanced_available() && self.moods.is_available() {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    /// A one-sentence vibe for a book; never empty
    pub fn generate_book_note(
        &self,
        description: &str,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Vibe {
        self.notes.generate(description, title, author)
    }

    /// Like [`generate_book_note`](Self::generate_book_note), with provenance
    pub fn generate_book_note_detailed(
        &self,
        description: &str,
        title: Option<&str>,
        author: Option<&str>,
    ) -> NoteOutcome {
        self.notes.generate_detailed(description, title, author)
    }

    /// Mood tags for a book, empty when unknown
    pub fn get_mood_tags_safe(&self, title: &str, author: Option<&str>) -> MoodTagList {
        self.moods.get_tags_safe(title, author)
    }

    /// The bookseller's reply to a chat message
    pub fn classify_and_respond(&self, message: &str, history: &[ChatTurn]) -> String {
        self.bookseller.classify_and_respond(message, history)
    }

    pub fn classify_intent(&self, message: &str) -> IntentCategory {
        self.bookseller.classifier().classify(message)
    }

    pub fn adapt_query(&self, query: &str) -> String {
        self.queries.adapt(query)
    }
}
