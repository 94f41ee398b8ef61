use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::error::AppError;
use crate::workflows::facts::router::remember_handler;
use crate::workflows::facts::{FactError, FactService, FactSubmission};

#[tokio::test]
async fn remember_route_creates_fact() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/api/memory")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "text": "Emma's recital is Friday" }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], 1);
    assert_eq!(payload["content"], "Emma's recital is Friday");
    assert!(payload["created_date"].is_string());
}

#[tokio::test]
async fn remember_handler_rejects_blank_text() {
    let (service, _) = build_service();
    let error = remember_handler(
        State(Arc::new(service)),
        Json(FactSubmission {
            text: "   ".to_string(),
        }),
    )
    .await
    .expect_err("blank text is rejected");

    assert!(matches!(error, AppError::Facts(FactError::EmptyContent)));
    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "fact error: fact text must not be empty");
}

#[tokio::test]
async fn remember_handler_reports_repository_failure() {
    let service = Arc::new(FactService::new(Arc::new(UnavailableRepository)));
    let response = remember_handler(
        State(service),
        Json(FactSubmission {
            text: "anything".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("fact error: ")));
}

#[tokio::test]
async fn list_route_uses_page_size_and_limit() {
    let service = seeded_service().with_page_size(4);
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/v1/facts")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(4));
    assert_eq!(payload[0]["id"], 8);

    let response = router
        .oneshot(
            Request::get("/api/v1/facts?limit=2")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn delete_route_returns_no_content_then_not_found() {
    let router = router_with_service(seeded_service());

    let request = || {
        Request::delete("/api/v1/facts/3")
            .body(Body::empty())
            .expect("request builds")
    };

    let response = router
        .clone()
        .oneshot(request())
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(request()).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "fact error: fact 3 not found");
}
