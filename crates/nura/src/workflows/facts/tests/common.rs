use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::facts::{
    fact_router, Fact, FactId, FactRepository, FactService, RepositoryError,
};

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<FactId, Fact>>>,
}

impl FactRepository for MemoryRepository {
    fn insert(&self, fact: Fact) -> Result<Fact, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&fact.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(fact.id, fact.clone());
        Ok(fact)
    }

    fn list(&self) -> Result<Vec<Fact>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, id: FactId) -> Result<Fact, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(&id).ok_or(RepositoryError::NotFound)
    }
}

pub(super) struct UnavailableRepository;

impl FactRepository for UnavailableRepository {
    fn insert(&self, _fact: Fact) -> Result<Fact, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Fact>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: FactId) -> Result<Fact, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (FactService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = FactService::new(repository.clone());
    (service, repository)
}

pub(super) fn seeded_service() -> FactService<MemoryRepository> {
    let (service, _) = build_service();
    service.seed().expect("seed facts load");
    service
}

pub(super) fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn router_with_service(service: FactService<MemoryRepository>) -> axum::Router {
    fact_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
