use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{AssessmentAnswer, AssessmentQuestion, CognitiveAssessment, ScoreResult};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitRequest {
    #[serde(default)]
    pub(crate) answers: Vec<AssessmentAnswer>,
}

/// Router serving the question table and scoring submissions.
pub fn assessment_router(assessment: Arc<CognitiveAssessment>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/submit", post(submit_handler))
        .with_state(assessment)
}

pub(crate) async fn questions_handler(
    State(assessment): State<Arc<CognitiveAssessment>>,
) -> Json<Vec<AssessmentQuestion>> {
    Json(assessment.questions().to_vec())
}

pub(crate) async fn submit_handler(
    State(assessment): State<Arc<CognitiveAssessment>>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<ScoreResult>, AppError> {
    let result = assessment.submit(&request.answers)?;
    Ok(Json(result))
}
