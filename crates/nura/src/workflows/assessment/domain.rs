use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How the user is expected to respond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Text,
    Audio,
}

/// Cognitive domain a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionContext {
    Orientation,
    SemanticMemory,
    EpisodicMemory,
    AttentionConcentration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(rename = "question")]
    pub prompt: String,
    pub context: QuestionContext,
}

impl AssessmentQuestion {
    fn new(id: &str, kind: QuestionType, prompt: &str, context: QuestionContext) -> Self {
        Self {
            id: QuestionId::new(id),
            kind,
            prompt: prompt.to_string(),
            context,
        }
    }
}

/// Response to one assessment question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentAnswer {
    pub question_id: QuestionId,
    #[serde(rename = "answer", default)]
    pub text: String,
}

impl AssessmentAnswer {
    pub fn new(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            text: text.into(),
        }
    }
}

/// The eight-question screening used by the companion.
pub fn standard_questions() -> Vec<AssessmentQuestion> {
    use QuestionContext::*;
    use QuestionType::*;

    vec![
        AssessmentQuestion::new(
            "q1",
            Text,
            "What is today's full date? (Month, Day, Year)",
            Orientation,
        ),
        AssessmentQuestion::new("q2", Text, "What is your current address?", Orientation),
        AssessmentQuestion::new(
            "q3",
            Audio,
            "Please describe the room you are currently in. Use at least 3 sentences.",
            SemanticMemory,
        ),
        AssessmentQuestion::new(
            "q4",
            Text,
            "Can you name 3 objects in your kitchen?",
            SemanticMemory,
        ),
        AssessmentQuestion::new(
            "q5",
            Audio,
            "Tell me about what you had for breakfast this morning.",
            EpisodicMemory,
        ),
        AssessmentQuestion::new(
            "q6",
            Text,
            "What are the names of your children?",
            EpisodicMemory,
        ),
        AssessmentQuestion::new(
            "q7",
            Audio,
            "Count backwards from 20 to 1 out loud.",
            AttentionConcentration,
        ),
        AssessmentQuestion::new("q8", Text, "What season is it right now?", Orientation),
    ]
}
