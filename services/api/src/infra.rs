use metrics_exporter_prometheus::PrometheusHandle;
use nura::config::CompanionConfig;
use nura::error::AppError;
use nura::workflows::assessment::CognitiveAssessment;
use nura::workflows::assistant::{standard_rules, KeywordMatcher};
use nura::workflows::facts::{Fact, FactId, FactRepository, FactService, RepositoryError};
use nura::workflows::profile::UserProfile;
use nura::workflows::timeline::{standard_timeline, TimelineEntry};
use nura::workflows::training::MemoryTraining;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFactRepository {
    records: Arc<Mutex<BTreeMap<FactId, Fact>>>,
}

impl InMemoryFactRepository {
    fn records(&self) -> Result<MutexGuard<'_, BTreeMap<FactId, Fact>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("fact store lock poisoned".to_string()))
    }
}

impl FactRepository for InMemoryFactRepository {
    fn insert(&self, fact: Fact) -> Result<Fact, RepositoryError> {
        let mut guard = self.records()?;
        if guard.contains_key(&fact.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(fact.id, fact.clone());
        Ok(fact)
    }

    fn list(&self) -> Result<Vec<Fact>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard.values().cloned().collect())
    }

    fn delete(&self, id: FactId) -> Result<Fact, RepositoryError> {
        let mut guard = self.records()?;
        guard.remove(&id).ok_or(RepositoryError::NotFound)
    }
}

/// Engines shared by the HTTP routes and the CLI demo.
pub(crate) struct CompanionServices {
    pub(crate) matcher: Arc<KeywordMatcher>,
    pub(crate) assessment: Arc<CognitiveAssessment>,
    pub(crate) training: Arc<MemoryTraining>,
    pub(crate) facts: Arc<FactService<InMemoryFactRepository>>,
    pub(crate) timeline: Arc<Vec<TimelineEntry>>,
}

impl CompanionServices {
    /// Builds every engine over the demo profile and seeds the fact store.
    pub(crate) fn standard(config: &CompanionConfig) -> Result<Self, AppError> {
        let matcher = KeywordMatcher::new(standard_rules(), UserProfile::sample())?;
        let training = MemoryTraining::standard(config.training_session_size)?;
        let facts = FactService::new(Arc::new(InMemoryFactRepository::default()))
            .with_page_size(config.fact_page_size);
        facts.seed()?;

        Ok(Self {
            matcher: Arc::new(matcher),
            assessment: Arc::new(CognitiveAssessment::standard()),
            training: Arc::new(training),
            facts: Arc::new(facts),
            timeline: Arc::new(standard_timeline()),
        })
    }
}
