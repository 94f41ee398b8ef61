//! Cognitive screening: the question table, the length-heuristic scorer, and
//! explicit progress state for a run.

pub mod domain;
mod progress;
pub mod router;
mod scorer;

pub use domain::{
    standard_questions, AssessmentAnswer, AssessmentQuestion, QuestionContext, QuestionId,
    QuestionType,
};
pub use progress::{AssessmentProgress, ProgressError};
pub use router::assessment_router;
pub use scorer::{
    answer_points, score, Breakdown, ScoreResult, ScoringError, Tier, MAX_POINTS_PER_ANSWER,
};

use tracing::info;

/// A fixed question table scored as one assessment.
#[derive(Debug, Clone)]
pub struct CognitiveAssessment {
    questions: Vec<AssessmentQuestion>,
}

impl CognitiveAssessment {
    pub fn new(questions: Vec<AssessmentQuestion>) -> Result<Self, ScoringError> {
        if questions.is_empty() {
            return Err(ScoringError::InvalidConfiguration);
        }
        Ok(Self { questions })
    }

    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[AssessmentQuestion] {
        &self.questions
    }

    pub fn submit(&self, answers: &[AssessmentAnswer]) -> Result<ScoreResult, ScoringError> {
        let result = score(answers, self.questions.len())?;
        info!(
            answers = answers.len(),
            questions = self.questions.len(),
            score = result.score,
            tier = ?result.tier,
            "cognitive assessment scored"
        );
        Ok(result)
    }
}
