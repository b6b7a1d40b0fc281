//! Bookseller Chat
//!
//! Classifies a chat message into exactly one [`IntentCategory`] with an
//! ordered, first-match-wins rule list, then answers with that category's
//! canned response.
//!
//! Triggers are matched case-insensitively and must start at a word
//! boundary, so "hi" fires on "Hi there" but not on "something", while
//! "thriller" still fires on "thrillers".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BiblioError, Result};
use crate::types::ChatTurn;

/// Intent of a chat message, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    Cozy,
    Mystery,
    Romance,
    Fantasy,
    SciFi,
    Emotional,
    Funny,
    Classic,
    YoungAdult,
    Historical,
    Biography,
    RainyDay,
    Beach,
    Bedtime,
    BookClub,
    Help,
    Similar,
    /// Nothing matched; ask the reader for more
    Clarify,
}

impl IntentCategory {
    /// All categories, highest priority first
    pub const ALL: [IntentCategory; 19] = [
        IntentCategory::Greeting,
        IntentCategory::Cozy,
        IntentCategory::Mystery,
        IntentCategory::Romance,
        IntentCategory::Fantasy,
        IntentCategory::SciFi,
        IntentCategory::Emotional,
        IntentCategory::Funny,
        IntentCategory::Classic,
        IntentCategory::YoungAdult,
        IntentCategory::Historical,
        IntentCategory::Biography,
        IntentCategory::RainyDay,
        IntentCategory::Beach,
        IntentCategory::Bedtime,
        IntentCategory::BookClub,
        IntentCategory::Help,
        IntentCategory::Similar,
        IntentCategory::Clarify,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IntentCategory::Greeting => "greeting",
            IntentCategory::Cozy => "cozy",
            IntentCategory::Mystery => "mystery",
            IntentCategory::Romance => "romance",
            IntentCategory::Fantasy => "fantasy",
            IntentCategory::SciFi => "sci_fi",
            IntentCategory::Emotional => "emotional",
            IntentCategory::Funny => "funny",
            IntentCategory::Classic => "classic",
            IntentCategory::YoungAdult => "young_adult",
            IntentCategory::Historical => "historical",
            IntentCategory::Biography => "biography",
            IntentCategory::RainyDay => "rainy_day",
            IntentCategory::Beach => "beach",
            IntentCategory::Bedtime => "bedtime",
            IntentCategory::BookClub => "book_club",
            IntentCategory::Help => "help",
            IntentCategory::Similar => "similar",
            IntentCategory::Clarify => "clarify",
        }
    }

    /// Default trigger phrases; empty for [`IntentCategory::Clarify`]
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            IntentCategory::Greeting => {
                &["hello", "hi", "hey", "good morning", "good afternoon"]
            }
            IntentCategory::Cozy => &["cozy"],
            IntentCategory::Mystery => &["mystery", "thriller", "suspense"],
            IntentCategory::Romance => &["romance", "romantic", "love"],
            IntentCategory::Fantasy => &["fantasy", "magic", "dragons", "wizards"],
            IntentCategory::SciFi => &["sci-fi", "science fiction", "space", "future"],
            IntentCategory::Emotional => &["sad", "cry", "emotional", "tearjerker"],
            IntentCategory::Funny => &["funny", "humor", "comedy", "laugh"],
            IntentCategory::Classic => &["classic", "literature", "literary"],
            IntentCategory::YoungAdult => &["young adult", "ya", "teen"],
            IntentCategory::Historical => &["historical", "history", "period"],
            IntentCategory::Biography => &["biography", "memoir", "true story"],
            IntentCategory::RainyDay => &["rainy day", "rainy evening", "stormy"],
            IntentCategory::Beach => &["beach", "vacation", "travel"],
            IntentCategory::Bedtime => &["bedtime", "before sleep", "night reading"],
            IntentCategory::BookClub => &["book club", "discussion", "group"],
            IntentCategory::Help => &["help", "recommend", "suggest", "find"],
            IntentCategory::Similar => &["similar", "like", "enjoyed"],
            IntentCategory::Clarify => &[],
        }
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative (triggers, category) rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub category: IntentCategory,
    pub triggers: Vec<String>,
}

impl IntentRule {
    pub fn new<S: Into<String>>(
        category: IntentCategory,
        triggers: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            category,
            triggers: triggers.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in rules, highest priority first
    pub fn defaults() -> Vec<IntentRule> {
        IntentCategory::ALL
            .iter()
            .filter(|c| !c.triggers().is_empty())
            .map(|&c| IntentRule::new(c, c.triggers().iter().copied()))
            .collect()
    }

    fn compile(&self) -> Result<CompiledRule> {
        let alternatives: Vec<String> = self
            .triggers
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .map(|t| bounded(&t))
            .collect();

        if alternatives.is_empty() {
            return Err(BiblioError::InvalidInput(format!(
                "intent rule '{}' has no triggers",
                self.category
            )));
        }

        let pattern = format!("(?:{})", alternatives.join("|"));
        let matcher = Regex::new(&pattern).map_err(|e| {
            BiblioError::InvalidInput(format!("intent rule '{}': {}", self.category, e))
        })?;

        Ok(CompiledRule {
            category: self.category,
            matcher,
        })
    }
}

/// Escape a trigger and anchor its leading edge at a word boundary
fn bounded(trigger: &str) -> String {
    let escaped = regex::escape(trigger);
    if trigger.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
        format!(r"\b{}", escaped)
    } else {
        escaped
    }
}

#[derive(Debug, Clone)]
struct CompiledRule {
    category: IntentCategory,
    matcher: Regex,
}

static DEFAULT_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    IntentRule::defaults()
        .iter()
        .map(|rule| rule.compile().unwrap())
        .collect()
});

/// First-match-wins intent classifier
#[derive(Debug, Clone)]
pub struct ChatIntentClassifier {
    rules: Vec<CompiledRule>,
}

impl Default for ChatIntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatIntentClassifier {
    /// Classifier with the built-in rules
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }

    /// Classifier with a custom ordered rule list
    ///
    /// Fails if a rule has no usable trigger or targets `Clarify`, which is
    /// reserved for messages no rule matches.
    pub fn with_rules(rules: &[IntentRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                if rule.category == IntentCategory::Clarify {
                    return Err(BiblioError::InvalidInput(
                        "the clarify intent cannot have triggers".to_string(),
                    ));
                }
                rule.compile()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Categories in the order they are tried
    pub fn priority(&self) -> Vec<IntentCategory> {
        self.rules.iter().map(|r| r.category).collect()
    }

    /// The single intent of a message
    pub fn classify(&self, message: &str) -> IntentCategory {
        let lower = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.is_match(&lower))
            .map(|rule| rule.category)
            .unwrap_or(IntentCategory::Clarify)
    }
}

/// Canned bookseller responses, one per intent
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn respond(&self, category: IntentCategory) -> &'static str {
        match category {
            IntentCategory::Greeting => "Hello! Welcome to BiblioDrift. I'm here to help you find your perfect next read. What kind of mood are you in for today?",
            IntentCategory::Cozy => "Ah, cozy reads are my specialty! There's nothing quite like curling up with a warm, comforting book. Let me find some perfect cozy companions for you.",
            IntentCategory::Mystery => "Excellent choice! I love helping readers find their next page-turner. Mystery and thriller books are perfect for those moments when you want to be completely absorbed.",
            IntentCategory::Romance => "Romance is such a beautiful genre! Whether you're looking for sweet and heartwarming or passionate and steamy, I have some wonderful recommendations for you.",
            IntentCategory::Fantasy => "Fantasy is pure escapism at its finest! Let me transport you to some incredible magical worlds where anything is possible.",
            IntentCategory::SciFi => "Science fiction opens up infinite possibilities! From space operas to dystopian futures, I have some mind-bending recommendations for you.",
            IntentCategory::Emotional => "Sometimes we need a good emotional release through literature. I have some beautifully written, deeply moving books that will touch your heart.",
            IntentCategory::Funny => "Laughter is the best medicine! I have some delightfully funny books that will brighten your day and keep you smiling.",
            IntentCategory::Classic => "Ah, a lover of the classics! There's something timeless about great literature. Let me suggest some enduring masterpieces and modern literary gems.",
            IntentCategory::YoungAdult => "Young adult literature has some of the most engaging and diverse stories! Whether you're a teen or just young at heart, I have some fantastic YA recommendations.",
            IntentCategory::Historical => "Historical fiction is like time travel through books! I love helping readers explore different eras and cultures through beautifully researched stories.",
            IntentCategory::Biography => "Real stories can be more fascinating than fiction! I have some incredible biographies and memoirs that will inspire and enlighten you.",
            IntentCategory::RainyDay => "Perfect rainy day reading coming up! There's something magical about the sound of rain while you're lost in a good book.",
            IntentCategory::Beach => "Vacation reads are special - they need to be engaging but not too heavy. Let me find you some perfect travel companions!",
            IntentCategory::Bedtime => "Bedtime reading requires just the right tone - engaging enough to hold your interest but soothing enough for evening. I have some perfect nighttime reads for you.",
            IntentCategory::BookClub => "Book club selections need to spark great discussions! I'll recommend some thought-provoking books that will give your group plenty to talk about.",
            IntentCategory::Help => "I'm here to help you discover your next favorite book! Tell me more about what you're in the mood for - a specific genre, feeling, or situation you'll be reading in.",
            IntentCategory::Similar => "Great! I love helping readers find books similar to ones they've enjoyed. The more you tell me about what you liked, the better I can tailor my recommendations.",
            IntentCategory::Clarify => "That sounds interesting! Could you tell me a bit more about what kind of mood or feeling you're going for? For example, are you looking for something light and fun, deep and thought-provoking, or maybe an exciting adventure?",
        }
    }
}

/// Classifier and responder together
#[derive(Debug, Clone, Default)]
pub struct Bookseller {
    classifier: ChatIntentClassifier,
    responder: ChatResponder,
}

impl Bookseller {
    pub fn new(classifier: ChatIntentClassifier) -> Self {
        Self {
            classifier,
            responder: ChatResponder,
        }
    }

    pub fn classifier(&self) -> &ChatIntentClassifier {
        &self.classifier
    }

    /// Reply to a message
    ///
    /// `history` is accepted for callers that track a conversation; the
    /// reply depends only on `message`.
    pub fn classify_and_respond(&self, message: &str, _history: &[ChatTurn]) -> String {
        let intent = self.classifier.classify(message);
        debug!(intent = %intent, "Classified chat message");
        self.responder.respond(intent).to_string()
    }
}
