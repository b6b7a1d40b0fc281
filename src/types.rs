//! Core types for Biblio

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One-sentence description of a book's feel
pub type Vibe = String;

/// Short label describing the emotional tone of a book
pub type MoodTag = String;

/// Ordered mood tags; empty when nothing is known
pub type MoodTagList = Vec<MoodTag>;

/// Prior chat turns, oldest first
pub type ConversationHistory = Vec<ChatTurn>;

/// Title and author of a book; either may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookIdentity {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

impl BookIdentity {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Both title and author are present
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.author.is_empty()
    }

    /// Normalized lookup key: trimmed and lower-cased
    pub fn key(&self) -> (String, String) {
        (normalize_key(&self.title), normalize_key(&self.author))
    }
}

pub(crate) fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Who said a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    #[default]
    User,
    Bookseller,
}

/// A single prior message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn bookseller(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bookseller,
            content: content.into(),
        }
    }
}

/// Whether an optional collaborator was loaded when the engine was built
///
/// Resolved once at construction and never re-evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Unavailable,
}

impl Availability {
    pub fn is_available(self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to a JSON mood catalog backing the enhanced collaborators
    #[serde(default)]
    pub mood_catalog_path: Option<PathBuf>,
    /// Use the catalog for enhanced book notes
    #[serde(default = "default_true")]
    pub enable_enhanced_notes: bool,
    /// Use the catalog for mood tags
    #[serde(default = "default_true")]
    pub enable_mood_tags: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mood_catalog_path: None,
            enable_enhanced_notes: true,
            enable_mood_tags: true,
        }
    }
}
