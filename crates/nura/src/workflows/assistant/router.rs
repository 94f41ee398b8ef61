use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ChatMessage, Conversation, KeywordMatcher, QueryResponse, SUGGESTED_QUESTIONS};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MemoryQuery {
    #[serde(default)]
    pub(crate) question: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationRequest {
    #[serde(default)]
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) question: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConversationResponse {
    pub(crate) conversation: Conversation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) response: Option<QueryResponse>,
}

/// Router exposing the assistant lookup the companion client calls.
pub fn assistant_router(matcher: Arc<KeywordMatcher>) -> Router {
    Router::new()
        .route("/api/memory", get(ask_handler))
        .route("/api/v1/assistant/suggestions", get(suggestions_handler))
        .route("/api/v1/assistant/conversation", post(conversation_handler))
        .with_state(matcher)
}

pub(crate) async fn ask_handler(
    State(matcher): State<Arc<KeywordMatcher>>,
    Query(query): Query<MemoryQuery>,
) -> Json<QueryResponse> {
    let question = query.question.unwrap_or_default();
    let response = matcher.match_question(&question);
    info!(category = response.category.label(), "answered memory question");
    Json(response)
}

pub(crate) async fn suggestions_handler() -> Json<Vec<&'static str>> {
    Json(SUGGESTED_QUESTIONS.to_vec())
}

pub(crate) async fn conversation_handler(
    State(matcher): State<Arc<KeywordMatcher>>,
    Json(request): Json<ConversationRequest>,
) -> Json<ConversationResponse> {
    let conversation = Conversation::from_messages(request.messages);
    let (conversation, response) = conversation.ask(&matcher, &request.question);
    Json(ConversationResponse {
        conversation,
        response,
    })
}
