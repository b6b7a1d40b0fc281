//! File-backed mood catalog
//!
//! A JSON file of hand-curated mood tags (and optional notes) per book.
//! Implements both collaborator traits so a single loaded catalog can back
//! mood tags and enhanced notes.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EnhancedNoteGenerator, MoodTagSource};
use crate::error::{CollaboratorError, Result};
use crate::types::{normalize_key, BookIdentity, MoodTagList, Vibe};

/// Maximum number of moods woven into a composed note
const MAX_NOTE_MOODS: usize = 3;

/// One book in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub moods: Vec<String>,
    /// Hand-written note, preferred over a composed one
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<CatalogEntry>,
}

/// In-memory mood catalog keyed by normalized (title, author)
#[derive(Debug, Clone, Default)]
pub struct MoodCatalog {
    entries: Vec<CatalogEntry>,
    by_book: HashMap<(String, String), usize>,
    by_title: HashMap<String, usize>,
}

impl MoodCatalog {
    /// Build a catalog from entries; later duplicates are ignored
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut by_book = HashMap::new();
        let mut by_title = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            let title = normalize_key(&entry.title);
            let author = normalize_key(&entry.author);
            by_title.entry(title.clone()).or_insert(idx);
            by_book.entry((title, author)).or_insert(idx);
        }

        Self {
            entries,
            by_book,
            by_title,
        }
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(Self::from_entries(file.books))
    }

    /// Load a catalog from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            books = catalog.len(),
            "Loaded mood catalog"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find a book; an empty author matches the first entry with that title
    pub fn lookup(&self, title: &str, author: &str) -> Option<&CatalogEntry> {
        let book = BookIdentity::new(title, author);
        let (title_key, author_key) = book.key();
        let idx = if author_key.is_empty() {
            self.by_title.get(&title_key)
        } else {
            self.by_book.get(&(title_key, author_key))
        };
        idx.map(|&i| &self.entries[i])
    }

    fn lookup_or_not_found(
        &self,
        title: &str,
        author: &str,
    ) -> std::result::Result<&CatalogEntry, CollaboratorError> {
        self.lookup(title, author)
            .ok_or_else(|| CollaboratorError::NotFound {
                title: title.to_string(),
                author: author.to_string(),
            })
    }
}

/// "a", "a and b", "a, b and c"
fn join_moods(moods: &[String]) -> String {
    match moods {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

impl MoodTagSource for MoodCatalog {
    fn get_tags(&self, title: &str, author: &str) -> std::result::Result<MoodTagList, CollaboratorError> {
        Ok(self.lookup_or_not_found(title, author)?.moods.clone())
    }

    fn name(&self) -> &str {
        "mood-catalog"
    }
}

impl EnhancedNoteGenerator for MoodCatalog {
    fn generate(
        &self,
        _description: &str,
        title: &str,
        author: &str,
    ) -> std::result::Result<Vibe, CollaboratorError> {
        let entry = self.lookup_or_not_found(title, author)?;

        if let Some(note) = entry.note.as_deref().map(str::trim) {
            if !note.is_empty() {
                return Ok(note.to_string());
            }
        }

        let moods: Vec<String> = entry
            .moods
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .take(MAX_NOTE_MOODS)
            .map(str::to_string)
            .collect();

        if moods.is_empty() {
            return Err(CollaboratorError::NotFound {
                title: title.to_string(),
                author: author.to_string(),
            });
        }

        Ok(format!("Readers describe this as {}.", join_moods(&moods)))
    }

    fn name(&self) -> &str {
        "mood-catalog"
    }
}
