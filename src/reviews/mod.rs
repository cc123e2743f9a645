// Canonical review domain: model, in-memory store, query engine and
// per-property aggregation.

pub mod aggregate;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use model::{PropertyAggregate, Review};
pub use service::ReviewService;
pub use store::ReviewStore;
