//! HTTP server exposing the book engine
//!
//! Handlers are thin: they decode JSON, call one engine operation and encode
//! the plain result.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::engine::BookEngine;
use crate::types::{ChatTurn, ConversationHistory, MoodTagList, Vibe};

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateNoteRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateNoteResponse {
    pub vibe: Vibe,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: ConversationHistory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoodTagsRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTagsResponse {
    pub tags: MoodTagList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub query: String,
}

/// HTTP server for the book engine
pub struct BiblioServer {
    engine: Arc<BookEngine>,
    addr: SocketAddr,
}

impl BiblioServer {
    pub fn new(engine: Arc<BookEngine>, port: u16) -> Self {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        Self { engine, addr }
    }

    /// Build the router
    pub fn router(engine: Arc<BookEngine>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/v1/generate-note", post(generate_note_handler))
            .route("/api/v1/chat", post(chat_handler))
            .route("/api/v1/mood-tags", post(mood_tags_handler))
            .route("/api/v1/recommendations", post(recommendations_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(engine)
    }

    /// Start the server
    pub async fn start(self) -> std::io::Result<()> {
        let app = Self::router(self.engine);

        tracing::info!("Biblio server listening on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

async fn health_handler(State(engine): State<Arc<BookEngine>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "enhanced": engine.mood_analysis().is_available(),
    }))
}

async fn generate_note_handler(
    State(engine): State<Arc<BookEngine>>,
    Json(req): Json<GenerateNoteRequest>,
) -> Json<GenerateNoteResponse> {
    let vibe = engine.generate_book_note(
        &req.description,
        req.title.as_deref(),
        req.author.as_deref(),
    );
    Json(GenerateNoteResponse { vibe })
}

async fn chat_handler(
    State(engine): State<Arc<BookEngine>>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let history: &[ChatTurn] = &req.history;
    let response = engine.classify_and_respond(&req.message, history);
    Json(ChatResponse { response })
}

async fn mood_tags_handler(
    State(engine): State<Arc<BookEngine>>,
    Json(req): Json<MoodTagsRequest>,
) -> Json<MoodTagsResponse> {
    let tags = engine.get_mood_tags_safe(&req.title, req.author.as_deref());
    Json(MoodTagsResponse { tags })
}

async fn recommendations_handler(
    State(engine): State<Arc<BookEngine>>,
    Json(req): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    Json(RecommendationResponse {
        query: engine.adapt_query(&req.query),
    })
}
