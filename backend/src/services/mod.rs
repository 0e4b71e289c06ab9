//! Business logic services for the Farm Advisory Dashboard

pub mod advisor;
pub mod catalog;

pub use advisor::AdvisoryService;
pub use catalog::CatalogService;
