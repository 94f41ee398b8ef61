use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{Fact, FactId, FactSubmission};
use super::repository::FactRepository;
use super::service::FactService;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    pub(crate) limit: Option<usize>,
}

/// Router exposing fact storage, including the legacy `POST /api/memory` intake.
pub fn fact_router<R>(service: Arc<FactService<R>>) -> Router
where
    R: FactRepository + 'static,
{
    Router::new()
        .route("/api/memory", post(remember_handler::<R>))
        .route("/api/v1/facts", get(list_handler::<R>))
        .route("/api/v1/facts/:fact_id", delete(forget_handler::<R>))
        .with_state(service)
}

pub(crate) async fn remember_handler<R>(
    State(service): State<Arc<FactService<R>>>,
    Json(submission): Json<FactSubmission>,
) -> Result<(StatusCode, Json<Fact>), AppError>
where
    R: FactRepository + 'static,
{
    let fact = service.remember(&submission.text)?;
    Ok((StatusCode::CREATED, Json(fact)))
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<FactService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Fact>>, AppError>
where
    R: FactRepository + 'static,
{
    let limit = query.limit.unwrap_or_else(|| service.page_size());
    Ok(Json(service.recent(limit)?))
}

pub(crate) async fn forget_handler<R>(
    State(service): State<Arc<FactService<R>>>,
    Path(fact_id): Path<u64>,
) -> Result<StatusCode, AppError>
where
    R: FactRepository + 'static,
{
    service.forget(FactId(fact_id))?;
    Ok(StatusCode::NO_CONTENT)
}
