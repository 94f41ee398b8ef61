use serde::Serialize;

use super::topics::Topic;

/// Keyword rule with an explicit precedence. Lower priorities are tested first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRule {
    pub priority: u16,
    pub keywords: Vec<String>,
    pub topic: Topic,
}

impl MatchRule {
    pub fn new<I, S>(priority: u16, keywords: I, topic: Topic) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            priority,
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().to_lowercase())
                .collect(),
            topic,
        }
    }

    /// `question` must already be lower-cased.
    pub(crate) fn matches(&self, question: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| question.contains(keyword.as_str()))
    }
}

/// Precedence list for the companion. Substring tests overlap, so more
/// specific topics run first: "grandchild" before "children", "song" before
/// "son", "medication" and "vacation" before "cat", and the catch-all "name" after every
/// topic a "what is my ...'s name" question can be about.
pub fn standard_rules() -> Vec<MatchRule> {
    vec![
        MatchRule::new(
            10,
            ["grandchild", "grandkid", "grandson", "granddaughter"],
            Topic::Grandchildren,
        ),
        MatchRule::new(20, ["husband", "spouse", "married"], Topic::Spouse),
        MatchRule::new(30, ["song", "music"], Topic::Music),
        MatchRule::new(40, ["children", "kids", "son", "daughter"], Topic::Children),
        MatchRule::new(50, ["sister", "brother", "sibling"], Topic::Siblings),
        MatchRule::new(60, ["birthday", "born", "age"], Topic::Birthday),
        MatchRule::new(70, ["favorite color"], Topic::FavoriteColor),
        MatchRule::new(80, ["favorite food", "like to eat"], Topic::FavoriteFood),
        MatchRule::new(90, ["medicine", "medication"], Topic::Medication),
        MatchRule::new(95, ["vacation", "travel"], Topic::Vacation),
        MatchRule::new(100, ["pet", "dog", "cat"], Topic::Pet),
        MatchRule::new(110, ["name", "who am i", "my name"], Topic::Identity),
        MatchRule::new(120, ["address", "live", "home", "house"], Topic::Home),
        MatchRule::new(130, ["work", "job", "career"], Topic::Career),
        MatchRule::new(140, ["garden", "hobby", "hobbies"], Topic::Hobbies),
        MatchRule::new(
            150,
            ["anniversary", "important date", "calendar"],
            Topic::ImportantDates,
        ),
        MatchRule::new(160, ["wedding"], Topic::Wedding),
        MatchRule::new(170, ["routine", "morning", "breakfast"], Topic::Routine),
    ]
}

/// Prompts the assistant offers before the user has asked anything.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Who is my husband?",
    "Tell me about my children",
    "Where do I live?",
    "What job did I have?",
];
