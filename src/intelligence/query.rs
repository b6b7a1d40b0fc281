//! Recommendation query adapter
//!
//! Callers run the actual book search elsewhere; this only tags the query.

/// Prefix prepended to every adapted query
pub const AI_QUERY_PREFIX: &str = "AI-optimized search for: ";

/// Passes a search query through unchanged, tagged as AI-optimized
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationQueryAdapter;

impl RecommendationQueryAdapter {
    pub fn adapt(&self, query: &str) -> String {
        format!("{AI_QUERY_PREFIX}{query}")
    }

    /// The original query, if `adapted` came from [`adapt`](Self::adapt)
    pub fn original<'a>(&self, adapted: &'a str) -> Option<&'a str> {
        adapted.strip_prefix(AI_QUERY_PREFIX)
    }
}
