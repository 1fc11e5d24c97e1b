use std::sync::Arc;
use std::time::Duration;

use configs::AppConfig;
use service::catalog::{repository::ServiceCategoryRepository, service::CatalogService};
use service::listing::{ListingService, RecordStore};
use service::pagination::PageLimits;

#[derive(Clone)]
pub struct AdminAuthConfig {
    /// `None` disables every admin write.
    pub api_key: Option<String>,
}

#[derive(Clone)]
pub struct ServerState {
    pub listing: Arc<ListingService>,
    pub catalog: Arc<CatalogService>,
    pub admin: AdminAuthConfig,
}

impl ServerState {
    pub fn from_config(
        store: Arc<dyn RecordStore>,
        categories: Arc<dyn ServiceCategoryRepository>,
        cfg: &AppConfig,
    ) -> Self {
        let limits = PageLimits {
            default_page_size: cfg.listing.default_page_size,
            max_page_size: cfg.listing.max_page_size,
        };
        let timeout = Duration::from_secs(cfg.listing.store_timeout_secs);
        Self {
            listing: Arc::new(ListingService::new(store, limits, timeout)),
            catalog: Arc::new(CatalogService::new(categories)),
            admin: AdminAuthConfig { api_key: cfg.admin.api_key.clone() },
        }
    }
}
