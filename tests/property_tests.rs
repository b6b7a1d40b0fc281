//! Property-based tests for biblio
//!
//! These tests verify invariants that must hold for all inputs:
//! - Every operation is total and never panics
//! - Notes and chat replies are never empty
//! - Collaborator failures never reach the caller
//! - The query adapter preserves its input
//!
//! Run with: cargo test --test property_tests

use std::sync::Arc;

use proptest::prelude::*;

use biblio::collaborators::{Capability, EnhancedNoteGenerator, MoodTagSource};
use biblio::intelligence::{FallbackRung, IntentCategory, AI_QUERY_PREFIX};
use biblio::{BookEngine, CollaboratorError, MoodTagList, Vibe};

struct AlwaysFails;

impl EnhancedNoteGenerator for AlwaysFails {
    fn generate(&self, _d: &str, _t: &str, _a: &str) -> Result<Vibe, CollaboratorError> {
        Err(CollaboratorError::Failed("service down".to_string()))
    }

    fn name(&self) -> &str {
        "always-fails"
    }
}

impl MoodTagSource for AlwaysFails {
    fn get_tags(&self, _t: &str, _a: &str) -> Result<MoodTagList, CollaboratorError> {
        Err(CollaboratorError::Failed("service down".to_string()))
    }

    fn name(&self) -> &str {
        "always-fails"
    }
}

struct AlwaysPanics;

impl EnhancedNoteGenerator for AlwaysPanics {
    fn generate(&self, _d: &str, _t: &str, _a: &str) -> Result<Vibe, CollaboratorError> {
        panic!("analyzer crashed")
    }

    fn name(&self) -> &str {
        "always-panics"
    }
}

impl MoodTagSource for AlwaysPanics {
    fn get_tags(&self, _t: &str, _a: &str) -> Result<MoodTagList, CollaboratorError> {
        panic!("analyzer crashed")
    }

    fn name(&self) -> &str {
        "always-panics"
    }
}

fn failing_engine() -> BookEngine {
    let failing = Arc::new(AlwaysFails);
    BookEngine::with_collaborators(
        Capability::Available(failing.clone()),
        Capability::Available(failing),
    )
}

fn panicking_engine() -> BookEngine {
    let panicking = Arc::new(AlwaysPanics);
    BookEngine::with_collaborators(
        Capability::Available(panicking.clone()),
        Capability::Available(panicking),
    )
}

// ============================================================================
// BOOK NOTE TESTS
// ============================================================================

mod book_note_tests {
    use super::*;

    proptest! {
        /// Invariant: a note is always one of the fallback sentences when no
        /// enhanced path exists, and never empty
        #[test]
        fn fallback_note_never_empty(description in "\\PC{0,300}") {
            let vibe = BookEngine::new().generate_book_note(&description, None, None);
            prop_assert!(!vibe.is_empty());
            prop_assert!(FallbackRung::ALL.iter().any(|r| r.note() == vibe));
        }

        /// Invariant: more than 200 characters is always the deep note
        #[test]
        fn long_descriptions_are_deep(description in "[a-z ]{201,400}") {
            let vibe = BookEngine::new().generate_book_note(&description, None, None);
            prop_assert_eq!(vibe, FallbackRung::Deep.note());
        }

        /// Invariant: 101..=200 characters is always the layered note
        #[test]
        fn medium_descriptions_are_layered(description in "[a-z ]{101,200}") {
            let vibe = BookEngine::new().generate_book_note(&description, None, None);
            prop_assert_eq!(vibe, FallbackRung::Layered.note());
        }

        /// Invariant: a failing collaborator yields the same note as none at all
        #[test]
        fn failing_collaborator_matches_fallback(
            description in "\\PC{0,250}",
            title in "[A-Za-z ]{1,30}",
            author in "[A-Za-z ]{1,30}",
        ) {
            let expected = BookEngine::new().generate_book_note(&description, None, None);
            let got = failing_engine().generate_book_note(&description, Some(&title), Some(&author));
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn panicking_collaborator_still_returns_a_note() {
        let vibe = panicking_engine().generate_book_note(
            "A mystery at the lighthouse",
            Some("The Lighthouse"),
            Some("Anon"),
        );
        assert_eq!(vibe, FallbackRung::Mystery.note());
    }
}

// ============================================================================
// MOOD TAG TESTS
// ============================================================================

mod mood_tag_tests {
    use super::*;

    proptest! {
        /// Invariant: a failing source always yields an empty list
        #[test]
        fn failing_source_is_empty(title in "\\PC{0,50}", author in proptest::option::of("\\PC{0,50}")) {
            let tags = failing_engine().get_mood_tags_safe(&title, author.as_deref());
            prop_assert!(tags.is_empty());
        }

        /// Invariant: no source always yields an empty list
        #[test]
        fn unavailable_source_is_empty(title in "\\PC{0,50}") {
            prop_assert!(BookEngine::new().get_mood_tags_safe(&title, None).is_empty());
        }
    }

    #[test]
    fn panicking_source_is_empty() {
        assert!(panicking_engine().get_mood_tags_safe("Dune", Some("Frank Herbert")).is_empty());
    }
}

// ============================================================================
// CHAT TESTS
// ============================================================================

mod chat_tests {
    use super::*;

    proptest! {
        /// Invariant: every message gets exactly one non-empty reply
        #[test]
        fn reply_never_empty(message in "\\PC{0,200}") {
            let reply = BookEngine::new().classify_and_respond(&message, &[]);
            prop_assert!(!reply.is_empty());
        }

        /// Invariant: classification ignores case
        #[test]
        fn classification_ignores_case(message in "[a-zA-Z ]{0,80}") {
            let engine = BookEngine::new();
            prop_assert_eq!(
                engine.classify_intent(&message.to_uppercase()),
                engine.classify_intent(&message.to_lowercase())
            );
        }

        /// Invariant: a greeting prefix always wins
        #[test]
        fn greeting_prefix_wins(rest in "[a-z ]{0,80}") {
            let message = format!("hello {}", rest);
            prop_assert_eq!(BookEngine::new().classify_intent(&message), IntentCategory::Greeting);
        }

        /// Invariant: digits alone never match a rule
        #[test]
        fn digits_are_clarify(message in "[0-9 ]{0,40}") {
            prop_assert_eq!(BookEngine::new().classify_intent(&message), IntentCategory::Clarify);
        }
    }
}

// ============================================================================
// QUERY ADAPTER TESTS
// ============================================================================

mod query_tests {
    use super::*;

    proptest! {
        /// Invariant: the adapted query is the prefix plus the exact input
        #[test]
        fn preserves_query(query in "\\PC{0,200}") {
            let adapted = BookEngine::new().adapt_query(&query);
            prop_assert!(adapted.starts_with(AI_QUERY_PREFIX));
            prop_assert_eq!(&adapted[AI_QUERY_PREFIX.len()..], query.as_str());
        }
    }
}
