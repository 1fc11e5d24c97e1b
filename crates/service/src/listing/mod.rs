//! Generic paginated, filtered listing over named collections.
//!
//! One [`ListingService`] serves every collection; per-collection behaviour
//! lives in the [`resource::RESOURCES`] table.

pub mod resource;
pub mod predicate;
pub mod request;
pub mod store;
pub mod memory;
pub mod seaorm;
pub mod service;

pub use predicate::FilterPredicate;
pub use request::{ListingFilters, ListingQuery, ListingRequest};
pub use resource::{Resource, ResourceSpec};
pub use service::{ListingService, Page};
pub use store::{Record, RecordStore, Window};
