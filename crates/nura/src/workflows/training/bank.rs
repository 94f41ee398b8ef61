use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingCategory {
    Family,
    Personal,
    Home,
    Memories,
    Career,
}

/// Recall question with every reply accepted as correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryQuestion {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub alternative_answers: Vec<String>,
    pub hint: String,
    pub category: TrainingCategory,
}

impl MemoryQuestion {
    /// Case-insensitive comparison of the trimmed reply against every accepted
    /// answer. Blank replies are never correct.
    pub fn accepts(&self, reply: &str) -> bool {
        let reply = reply.trim();
        if reply.is_empty() {
            return false;
        }
        let reply = reply.to_lowercase();
        std::iter::once(&self.answer)
            .chain(self.alternative_answers.iter())
            .any(|accepted| accepted.trim().to_lowercase() == reply)
    }
}

fn question(
    id: u32,
    question: &str,
    answer: &str,
    alternatives: &[&str],
    hint: &str,
    category: TrainingCategory,
) -> MemoryQuestion {
    MemoryQuestion {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
        alternative_answers: alternatives.iter().map(|alt| alt.to_string()).collect(),
        hint: hint.to_string(),
        category,
    }
}

/// Recall questions about the demo profile.
pub fn standard_bank() -> Vec<MemoryQuestion> {
    use TrainingCategory::*;

    vec![
        question(
            1,
            "What is your husband's name?",
            "Robert",
            &["Robert", "Bob", "Bobby"],
            "His nickname starts with 'B'",
            Family,
        ),
        question(
            2,
            "What is your daughter's name?",
            "Sarah",
            &["Sarah"],
            "She is a teacher",
            Family,
        ),
        question(
            3,
            "What is your son's name?",
            "Michael",
            &["Michael", "Mike"],
            "He is an engineer",
            Family,
        ),
        question(
            4,
            "What is your favorite color?",
            "Blue",
            &["Blue"],
            "It's the color of the sky",
            Personal,
        ),
        question(
            5,
            "What is your pet's name?",
            "Sunny",
            &["Sunny"],
            "A golden retriever",
            Personal,
        ),
        question(
            6,
            "What street do you live on?",
            "Maple Street",
            &["Maple Street", "42 Maple Street", "Maple"],
            "It's named after a type of tree",
            Home,
        ),
        question(
            7,
            "Where did you get married?",
            "St. Mary's Church",
            &[
                "St. Mary's Church",
                "St Mary's Church",
                "St. Mary's",
                "St Mary's",
                "Boston",
            ],
            "It's a church in Boston",
            Memories,
        ),
        question(
            8,
            "What is your favorite song?",
            "Moon River",
            &["Moon River"],
            "You danced to it at your wedding",
            Personal,
        ),
        question(
            9,
            "How many grandchildren do you have?",
            "3",
            &["3", "Three"],
            "Emma, Jack, and Lily",
            Family,
        ),
        question(
            10,
            "What job did you have?",
            "Librarian",
            &["Librarian", "Library"],
            "You worked with books",
            Career,
        ),
        question(
            11,
            "What is your sister's name?",
            "Dorothy",
            &["Dorothy", "Dot"],
            "She lives in Florida",
            Family,
        ),
        question(
            12,
            "What is your favorite food?",
            "Apple pie",
            &["Apple pie", "Pie"],
            "A dessert made with fruit",
            Personal,
        ),
    ]
}
