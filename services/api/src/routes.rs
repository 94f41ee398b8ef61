use crate::infra::{AppState, CompanionServices};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use nura::workflows::assessment::assessment_router;
use nura::workflows::assistant::assistant_router;
use nura::workflows::facts::fact_router;
use nura::workflows::timeline::timeline_router;
use nura::workflows::training::training_router;
use serde_json::json;

pub(crate) fn with_companion_routes(services: CompanionServices) -> axum::Router {
    let CompanionServices {
        matcher,
        assessment,
        training,
        facts,
        timeline,
    } = services;

    assistant_router(matcher)
        .merge(fact_router(facts))
        .merge(assessment_router(assessment))
        .merge(training_router(training))
        .merge(timeline_router(timeline))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use nura::config::CompanionConfig;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let services =
            CompanionServices::standard(&CompanionConfig::default()).expect("services build");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_companion_routes(services).layer(Extension(state))
    }

    async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("route executes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let payload = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, payload)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request builds")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, payload) = send(app(false), get("/ready")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        let (status, payload) = send(app(true), get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn health_and_metrics_respond() {
        let (status, payload) = send(app(true), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");

        let response = app(true)
            .oneshot(get("/metrics"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn memory_path_answers_and_stores() {
        let (status, payload) = send(
            app(true),
            get("/api/memory?question=Who%20is%20my%20husband%3F"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["category"], "family");

        let request = Request::post("/api/memory")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "text": "Dentist on Tuesday" }).to_string()))
            .expect("request builds");
        let (status, payload) = send(app(true), request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(payload["id"], 11);
        assert_eq!(payload["content"], "Dentist on Tuesday");
    }

    #[tokio::test]
    async fn listings_use_configured_defaults() {
        let (status, payload) = send(app(true), get("/api/v1/facts")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.as_array().map(Vec::len), Some(10));

        let (_, payload) = send(app(true), get("/api/v1/timeline")).await;
        assert_eq!(payload.as_array().map(Vec::len), Some(9));

        let (_, payload) = send(app(true), get("/api/v1/training/session")).await;
        assert_eq!(payload.as_array().map(Vec::len), Some(5));

        let (_, payload) = send(app(true), get("/api/v1/assistant/suggestions")).await;
        assert_eq!(payload[0], "Who is my husband?");
    }

    #[tokio::test]
    async fn unknown_fact_delete_is_not_found() {
        let request = Request::delete("/api/v1/facts/999")
            .body(Body::empty())
            .expect("request builds");
        let (status, payload) = send(app(true), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "fact error: fact 999 not found");
    }
}
