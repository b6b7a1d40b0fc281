//! Rule-based book intelligence
//!
//! Provides:
//! - Book vibe notes with a deterministic fallback ladder
//! - Safe mood tag lookup
//! - Bookseller chat intent classification and responses
//! - Recommendation query adaptation

pub mod book_note;
pub mod chat_intent;
pub mod mood_tags;
pub mod query;

pub use book_note::{
    BookNoteGenerator, FallbackRung, NoteOutcome, NoteSource, DEEP_DESCRIPTION_CHARS,
    LAYERED_DESCRIPTION_CHARS,
};
pub use chat_intent::{
    Bookseller, ChatIntentClassifier, ChatResponder, IntentCategory, IntentRule,
};
pub use mood_tags::MoodTagProvider;
pub use query::{RecommendationQueryAdapter, AI_QUERY_PREFIX};
