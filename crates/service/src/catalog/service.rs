use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::ServiceCategoryInput;
use super::repository::ServiceCategoryRepository;
use crate::errors::ServiceError;
use models::service_category::{self, NewServiceCategory};

/// Validates dashboard input before it is persisted.
pub struct CatalogService {
    repo: Arc<dyn ServiceCategoryRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ServiceCategoryRepository>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_service_category(&self, input: ServiceCategoryInput) -> Result<service_category::Model, ServiceError> {
        let new = NewServiceCategory::new(&input.name, input.description.as_deref(), input.price_cents, input.active)?;
        let created = self.repo.create(new).await?;
        info!(id = %created.id, "service_category_created");
        Ok(created)
    }
}
