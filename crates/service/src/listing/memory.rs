//! In-process record store for tests and local demos.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::predicate::FilterPredicate;
use super::resource::{Resource, ResourceSpec};
use super::store::{Record, RecordStore, Window};
use crate::errors::StoreError;

/// Holds rows per collection in memory with the same filter and sort
/// semantics as the SQL store. Timestamps are compared as strings, so
/// seed them as UTC RFC 3339.
#[derive(Default)]
pub struct MemoryRecordStore {
    rows: RwLock<HashMap<Resource, Vec<Record>>>,
    calls: AtomicUsize,
}

impl MemoryRecordStore {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&self, resource: Resource, record: Record) {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.entry(resource).or_default().push(record);
    }

    pub fn extend<I: IntoIterator<Item = Record>>(&self, resource: Resource, records: I) {
        let mut rows = self.rows.write().unwrap_or_else(|e| e.into_inner());
        rows.entry(resource).or_default().extend(records);
    }

    /// Number of `count` + `select` calls served so far.
    pub fn calls(&self) -> usize { self.calls.load(AtomicOrdering::SeqCst) }

    fn matching(&self, spec: &ResourceSpec, predicates: &[FilterPredicate]) -> Vec<Record> {
        self.calls.fetch_add(1, AtomicOrdering::SeqCst);
        let rows = self.rows.read().unwrap_or_else(|e| e.into_inner());
        rows.get(&spec.resource)
            .map(|all| {
                all.iter()
                    .filter(|r| predicates.iter().all(|p| p.matches(r)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn count(&self, spec: &ResourceSpec, predicates: &[FilterPredicate]) -> Result<u64, StoreError> {
        Ok(self.matching(spec, predicates).len() as u64)
    }

    async fn select(&self, spec: &ResourceSpec, predicates: &[FilterPredicate], window: Window) -> Result<Vec<Record>, StoreError> {
        let mut rows = self.matching(spec, predicates);
        rows.sort_by(|a, b| {
            compare_values(b.get(spec.sort_key), a.get(spec.sort_key))
                .then_with(|| compare_values(b.get("id"), a.get("id")))
        });
        let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }
}
