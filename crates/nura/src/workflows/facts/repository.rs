use super::domain::{Fact, FactId};

/// Storage abstraction so the service can be exercised in isolation.
pub trait FactRepository: Send + Sync {
    fn insert(&self, fact: Fact) -> Result<Fact, RepositoryError>;
    /// Every stored fact, in no particular order.
    fn list(&self) -> Result<Vec<Fact>, RepositoryError>;
    fn delete(&self, id: FactId) -> Result<Fact, RepositoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
