use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument};

use super::predicate::FilterPredicate;
use super::request::ListingRequest;
use super::resource::Resource;
use super::store::{Record, RecordStore, Window};
use crate::errors::{ServiceError, StoreError};
use crate::pagination::{PageLimits, Pagination};

/// One bounded slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
}

/// Generic listing over every collection in the resource table.
///
/// # Examples
/// ```
/// use std::{sync::Arc, time::Duration};
/// use service::listing::{ListingRequest, ListingService, Resource, memory::MemoryRecordStore};
/// use service::pagination::PageLimits;
///
/// let store = Arc::new(MemoryRecordStore::new());
/// for i in 0..25 {
///     store.insert(Resource::Customers, serde_json::json!({"id": i, "name": format!("customer {i}")}));
/// }
/// let svc = ListingService::new(store, PageLimits::default(), Duration::from_secs(1));
/// let page = tokio_test::block_on(svc.list(ListingRequest::new("customers").page(2).page_size(20))).unwrap();
/// assert_eq!(page.items.len(), 5);
/// assert_eq!(page.total, 25);
/// assert_eq!(page.total_pages, 2);
/// ```
pub struct ListingService {
    store: Arc<dyn RecordStore>,
    limits: PageLimits,
    timeout: Duration,
}

impl ListingService {
    pub fn new(store: Arc<dyn RecordStore>, limits: PageLimits, timeout: Duration) -> Self {
        Self { store, limits, timeout }
    }

    /// Validate the request, then fetch the count and the page window.
    /// Invalid requests never reach the store; store failures are returned as-is.
    #[instrument(skip(self, request), fields(resource = %request.resource, page = ?request.page, page_size = ?request.page_size))]
    pub async fn list(&self, request: ListingRequest) -> Result<Page<Record>, ServiceError> {
        let spec = Resource::from_name(&request.resource)
            .ok_or_else(|| ServiceError::unknown_resource(&request.resource))?
            .spec();
        let paging = Pagination::new(request.page, request.page_size, self.limits)?;
        let predicates: Vec<FilterPredicate> = request
            .filters
            .search
            .as_deref()
            .and_then(|term| FilterPredicate::search(spec, term))
            .into_iter()
            .collect();
        let window = Window { offset: paging.offset(), limit: paging.page_size };

        let fetch = async {
            if window.is_unreachable() {
                let total = self.store.count(spec, &predicates).await?;
                return Ok::<_, StoreError>((total, Vec::new()));
            }
            tokio::try_join!(
                self.store.count(spec, &predicates),
                self.store.select(spec, &predicates, window),
            )
        };
        let (total, mut items) = tokio::time::timeout(self.timeout, fetch)
            .await
            .map_err(|_| StoreError::Timeout(self.timeout))??;

        items.truncate(paging.page_size as usize);
        debug!(total, returned = items.len(), "listing fetched");
        Ok(Page {
            items,
            page: paging.page,
            page_size: paging.page_size,
            total,
            total_pages: paging.total_pages(total),
        })
    }
}
