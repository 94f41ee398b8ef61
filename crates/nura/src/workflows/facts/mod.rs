//! Fact storage behind the companion's "remember this" surface.

pub mod domain;
pub mod repository;
pub mod router;
mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Fact, FactId, FactSubmission};
pub use repository::{FactRepository, RepositoryError};
pub use router::fact_router;
pub use seed::SEED_FACTS;
pub use service::{FactError, FactService};
