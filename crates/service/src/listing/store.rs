use async_trait::async_trait;

use super::predicate::FilterPredicate;
use super::resource::ResourceSpec;
use crate::errors::StoreError;

/// A stored row, as a JSON object.
pub type Record = serde_json::Value;

/// Largest offset a SQL backend can bind (`OFFSET` is a signed 64-bit value).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Row range of one page: `[offset, offset + limit)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

impl Window {
    /// No backend can hold a row at this offset.
    pub fn is_unreachable(&self) -> bool { self.offset > MAX_OFFSET }
}

/// Backend capable of counting and range-selecting a named collection.
///
/// `count` and `select` must apply `predicates` identically so the total
/// describes exactly the rows that paging walks through.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn count(&self, spec: &ResourceSpec, predicates: &[FilterPredicate]) -> Result<u64, StoreError>;

    /// Matching rows sorted by `spec.sort_key` then `id`, both descending.
    async fn select(&self, spec: &ResourceSpec, predicates: &[FilterPredicate], window: Window) -> Result<Vec<Record>, StoreError>;
}
