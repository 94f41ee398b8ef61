pub mod assessment;
pub mod assistant;
pub mod facts;
pub mod profile;
pub mod timeline;
pub mod training;
