use serde::{Deserialize, Serialize};

use super::{AnswerCategory, KeywordMatcher, QueryResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<AnswerCategory>,
}

/// Chat transcript between the user and the assistant.
///
/// Conversations are values: [`Conversation::ask`] consumes the transcript and
/// hands back the extended one, so callers own every intermediate state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub const GREETING: &'static str = "Hello! I'm here to help you remember. Ask me anything about your life, family, or memories. I'm here to help!";

    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Assistant,
                text: Self::GREETING.to_string(),
                category: None,
            }],
        }
    }

    /// Rebuilds a conversation from a transcript the caller kept.
    pub fn from_messages(messages: Vec<ChatMessage>) -> Self {
        if messages.is_empty() {
            Self::new()
        } else {
            Self { messages }
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Appends the question and the matcher's answer. Blank questions leave the
    /// transcript untouched and produce no response.
    pub fn ask(
        mut self,
        matcher: &KeywordMatcher,
        question: &str,
    ) -> (Self, Option<QueryResponse>) {
        let question = question.trim();
        if question.is_empty() {
            return (self, None);
        }

        let response = matcher.match_question(question);
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: question.to_string(),
            category: None,
        });
        self.messages.push(ChatMessage {
            speaker: Speaker::Assistant,
            text: response.answer.clone(),
            category: Some(response.category),
        });

        (self, Some(response))
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
