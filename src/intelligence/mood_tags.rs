//! Mood Tags
//!
//! Safe access to mood tags from an optional [`MoodTagSource`].

use tracing::warn;

use crate::collaborators::{Capability, MoodTagSource};
use crate::error::CollaboratorError;
use crate::types::MoodTagList;

/// Wraps an optional mood tag source; never fails
#[derive(Debug, Clone, Default)]
pub struct MoodTagProvider {
    source: Capability<dyn MoodTagSource>,
}

impl MoodTagProvider {
    pub fn new(source: Capability<dyn MoodTagSource>) -> Self {
        Self { source }
    }

    pub fn is_available(&self) -> bool {
        self.source.is_available()
    }

    /// Mood tags for a book, or an empty list when none can be had
    pub fn get_tags_safe(&self, title: &str, author: Option<&str>) -> MoodTagList {
        let author = author.unwrap_or_default();
        match self.try_get_tags(title, author) {
            Ok(tags) => tags,
            Err(CollaboratorError::Unavailable) => Vec::new(),
            Err(e) => {
                warn!(
                    title = %title,
                    author = %author,
                    error = %e,
                    kind = e.kind(),
                    "Error getting mood tags"
                );
                Vec::new()
            }
        }
    }

    /// One attempt at the source, failures reported
    pub fn try_get_tags(&self, title: &str, author: &str) -> Result<MoodTagList, CollaboratorError> {
        self.source.call(|s| s.get_tags(title, author))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Broken;

    impl MoodTagSource for Broken {
        fn get_tags(&self, _t: &str, _a: &str) -> Result<MoodTagList, CollaboratorError> {
            Err(CollaboratorError::Failed("connection reset".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    struct Panics;

    impl MoodTagSource for Panics {
        fn get_tags(&self, _t: &str, _a: &str) -> Result<MoodTagList, CollaboratorError> {
            panic!("index out of range")
        }

        fn name(&self) -> &str {
            "panics"
        }
    }

    struct Echo;

    impl MoodTagSource for Echo {
        fn get_tags(&self, title: &str, author: &str) -> Result<MoodTagList, CollaboratorError> {
            Ok(vec![title.to_string(), author.to_string()])
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    fn provider(source: Arc<dyn MoodTagSource>) -> MoodTagProvider {
        MoodTagProvider::new(Capability::available(source))
    }

    #[test]
    fn test_unavailable_returns_empty() {
        let provider = MoodTagProvider::default();
        assert!(!provider.is_available());
        assert!(provider.get_tags_safe("Dune", Some("Frank Herbert")).is_empty());
    }

    #[test]
    fn test_failure_returns_empty() {
        assert!(provider(Arc::new(Broken)).get_tags_safe("Dune", None).is_empty());
    }

    #[test]
    fn test_panic_returns_empty() {
        assert!(provider(Arc::new(Panics)).get_tags_safe("Dune", None).is_empty());
    }

    #[test]
    fn test_missing_author_passed_as_empty() {
        let tags = provider(Arc::new(Echo)).get_tags_safe("Dune", None);
        assert_eq!(tags, vec!["Dune".to_string(), String::new()]);
    }
}
