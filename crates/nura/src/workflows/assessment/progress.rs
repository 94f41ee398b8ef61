use serde::{Deserialize, Serialize};

use super::domain::{AssessmentAnswer, AssessmentQuestion};
use super::scorer::{score, ScoreResult, ScoringError};

/// Where a user is in an assessment run.
///
/// Each step consumes the state and returns the next one; the question table
/// itself is borrowed from the caller so the state stays small enough to ship
/// back and forth with the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProgress {
    answers: Vec<AssessmentAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("an answer is required before moving on")]
    BlankAnswer,
    #[error("every question has already been answered")]
    AlreadyComplete,
}

impl AssessmentProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &[AssessmentAnswer] {
        &self.answers
    }

    pub fn current<'q>(&self, questions: &'q [AssessmentQuestion]) -> Option<&'q AssessmentQuestion> {
        questions.get(self.answers.len())
    }

    pub fn is_complete(&self, questions: &[AssessmentQuestion]) -> bool {
        self.answers.len() >= questions.len()
    }

    /// Fraction of questions answered, in `[0, 1]`.
    pub fn progress(&self, questions: &[AssessmentQuestion]) -> f32 {
        if questions.is_empty() {
            return 1.0;
        }
        self.answers.len().min(questions.len()) as f32 / questions.len() as f32
    }

    /// Records a trimmed answer for the current question and advances.
    pub fn record(
        mut self,
        questions: &[AssessmentQuestion],
        reply: &str,
    ) -> Result<Self, (Self, ProgressError)> {
        let Some(question) = self.current(questions) else {
            return Err((self, ProgressError::AlreadyComplete));
        };
        let reply = reply.trim();
        if reply.is_empty() {
            return Err((self, ProgressError::BlankAnswer));
        }

        let answer = AssessmentAnswer {
            question_id: question.id.clone(),
            text: reply.to_string(),
        };
        self.answers.push(answer);
        Ok(self)
    }

    /// Scores the collected answers against the full question table.
    pub fn finish(&self, questions: &[AssessmentQuestion]) -> Result<ScoreResult, ScoringError> {
        score(&self.answers, questions.len())
    }
}
