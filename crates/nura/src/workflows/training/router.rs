use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{MemoryQuestion, MemoryTraining, Verdict};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct CheckRequest {
    pub(crate) question_id: u32,
    #[serde(default)]
    pub(crate) answer: String,
}

/// Router for drawing practice rounds and checking replies.
pub fn training_router(training: Arc<MemoryTraining>) -> Router {
    Router::new()
        .route("/api/v1/training/questions", get(bank_handler))
        .route("/api/v1/training/session", get(session_handler))
        .route("/api/v1/training/check", post(check_handler))
        .with_state(training)
}

pub(crate) async fn bank_handler(
    State(training): State<Arc<MemoryTraining>>,
) -> Json<Vec<MemoryQuestion>> {
    Json(training.bank().to_vec())
}

pub(crate) async fn session_handler(
    State(training): State<Arc<MemoryTraining>>,
) -> Result<Json<Vec<MemoryQuestion>>, AppError> {
    let session = training.start_session(&mut rand::thread_rng())?;
    Ok(Json(session.questions().to_vec()))
}

pub(crate) async fn check_handler(
    State(training): State<Arc<MemoryTraining>>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<Verdict>, AppError> {
    let verdict = training.check(request.question_id, &request.answer)?;
    Ok(Json(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn training() -> Arc<MemoryTraining> {
        Arc::new(MemoryTraining::standard(5).expect("bank"))
    }

    async fn post_check(body: Value) -> (StatusCode, Value) {
        let response = training_router(training())
            .oneshot(
                Request::post("/api/v1/training/check")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn session_handler_draws_configured_size() {
        let Json(questions) = session_handler(State(training()))
            .await
            .expect("session drawn");
        assert_eq!(questions.len(), 5);
    }

    #[tokio::test]
    async fn check_route_reports_verdict() {
        let (status, payload) = post_check(json!({ "question_id": 6, "answer": "maple" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["correct"], true);
        assert_eq!(payload["expected"], "Maple Street");
    }

    #[tokio::test]
    async fn check_route_rejects_unknown_questions() {
        let (status, payload) = post_check(json!({ "question_id": 404, "answer": "x" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("404"));
    }

    #[tokio::test]
    async fn check_route_rejects_blank_answers() {
        let (status, _) = post_check(json!({ "question_id": 1, "answer": "  " })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
