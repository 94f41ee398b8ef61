use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::domain::{Fact, FactId};
use super::repository::{FactRepository, RepositoryError};
use super::seed::SEED_FACTS;
use crate::config::CompanionConfig;

/// Service assigning ids and timestamps before handing facts to the repository.
pub struct FactService<R> {
    repository: Arc<R>,
    sequence: AtomicU64,
    page_size: usize,
}

impl<R> FactService<R>
where
    R: FactRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            sequence: AtomicU64::new(1),
            page_size: CompanionConfig::DEFAULT_FACT_PAGE_SIZE,
        }
    }

    /// Page size used when a listing does not ask for one. Zero is ignored.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn next_id(&self) -> FactId {
        FactId(self.sequence.fetch_add(1, Ordering::Relaxed))
    }

    pub fn remember(&self, text: &str) -> Result<Fact, FactError> {
        self.remember_at(text, Utc::now())
    }

    /// Stores trimmed text stamped with `created_date`.
    pub fn remember_at(&self, text: &str, created_date: DateTime<Utc>) -> Result<Fact, FactError> {
        let content = text.trim();
        if content.is_empty() {
            return Err(FactError::EmptyContent);
        }

        let fact = Fact {
            id: self.next_id(),
            content: content.to_string(),
            created_date,
        };
        let stored = self.repository.insert(fact)?;
        debug!(fact_id = %stored.id, "fact stored");
        Ok(stored)
    }

    /// Loads the demo facts, returning what was stored.
    pub fn seed(&self) -> Result<Vec<Fact>, FactError> {
        let mut stored = Vec::with_capacity(SEED_FACTS.len());
        for (content, stamp) in SEED_FACTS {
            let created_date = DateTime::parse_from_rfc3339(stamp)?.with_timezone(&Utc);
            stored.push(self.remember_at(content, created_date)?);
        }
        info!(count = stored.len(), "seed facts loaded");
        Ok(stored)
    }

    /// Newest facts first, ties broken by the higher id.
    pub fn recent(&self, limit: usize) -> Result<Vec<Fact>, FactError> {
        let mut facts = self.repository.list()?;
        facts.sort_by(|a, b| {
            b.created_date
                .cmp(&a.created_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        facts.truncate(limit);
        Ok(facts)
    }

    pub fn forget(&self, id: FactId) -> Result<Fact, FactError> {
        match self.repository.delete(id) {
            Ok(fact) => {
                debug!(fact_id = %id, "fact deleted");
                Ok(fact)
            }
            Err(RepositoryError::NotFound) => Err(FactError::NotFound(id)),
            Err(other) => Err(other.into()),
        }
    }
}

/// Error raised by the fact service.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    #[error("fact text must not be empty")]
    EmptyContent,
    #[error("fact {0} not found")]
    NotFound(FactId),
    #[error("invalid fact timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
