//! Life assistant: answers free-text questions about the user from the
//! profile fact table using ordered keyword rules.

mod conversation;
pub mod router;
mod rules;
mod topics;

pub use conversation::{ChatMessage, Conversation, Speaker};
pub use router::assistant_router;
pub use rules::{standard_rules, MatchRule, SUGGESTED_QUESTIONS};
pub use topics::{general_summary, AnswerCategory, Topic};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::workflows::profile::UserProfile;

/// Answer produced for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub category: AnswerCategory,
}

/// Stateless keyword matcher over a fixed profile.
///
/// Rules are held sorted by priority; the first rule with a keyword contained
/// in the lower-cased question wins. Unmatched questions get the general
/// profile summary, so matching never fails.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    rules: Vec<MatchRule>,
    profile: UserProfile,
    fallback: String,
}

impl KeywordMatcher {
    pub fn new(mut rules: Vec<MatchRule>, profile: UserProfile) -> Result<Self, MatcherError> {
        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.priority) {
                return Err(MatcherError::DuplicatePriority(rule.priority));
            }
            if rule.keywords.is_empty() {
                return Err(MatcherError::NoKeywords {
                    priority: rule.priority,
                });
            }
            if rule.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
                return Err(MatcherError::EmptyKeyword {
                    priority: rule.priority,
                });
            }
        }
        rules.sort_by_key(|rule| rule.priority);

        let fallback = general_summary(&profile);
        Ok(Self {
            rules,
            profile,
            fallback,
        })
    }

    /// Matcher over the standard precedence list.
    pub fn standard(profile: UserProfile) -> Self {
        let rules = standard_rules();
        let fallback = general_summary(&profile);
        let mut matcher = Self {
            rules,
            profile,
            fallback,
        };
        matcher.rules.sort_by_key(|rule| rule.priority);
        matcher
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn match_question(&self, question: &str) -> QueryResponse {
        let lowered = question.to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => {
                debug!(priority = rule.priority, topic = ?rule.topic, "question matched rule");
                QueryResponse {
                    answer: rule.topic.render(&self.profile),
                    category: rule.topic.category(),
                }
            }
            None => {
                debug!("question matched no rule; answering with profile summary");
                QueryResponse {
                    answer: self.fallback.clone(),
                    category: AnswerCategory::General,
                }
            }
        }
    }
}

/// Rule table problems detected while building a matcher.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatcherError {
    #[error("two rules share priority {0}")]
    DuplicatePriority(u16),
    #[error("rule with priority {priority} has no keywords")]
    NoKeywords { priority: u16 },
    #[error("rule with priority {priority} contains an empty keyword")]
    EmptyKeyword { priority: u16 },
}
