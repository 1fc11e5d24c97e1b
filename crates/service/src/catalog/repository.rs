use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use models::service_category::{self, NewServiceCategory};

/// Persistence for service categories.
#[async_trait]
pub trait ServiceCategoryRepository: Send + Sync {
    async fn create(&self, input: NewServiceCategory) -> Result<service_category::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceCategoryRepository for SeaOrmServiceCategoryRepository {
    async fn create(&self, input: NewServiceCategory) -> Result<service_category::Model, ServiceError> {
        Ok(service_category::create(&self.db, input).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockServiceCategoryRepository {
        created: Mutex<Vec<service_category::Model>>,
    }

    impl MockServiceCategoryRepository {
        pub fn created(&self) -> Vec<service_category::Model> {
            self.created.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }
    }

    #[async_trait]
    impl ServiceCategoryRepository for MockServiceCategoryRepository {
        async fn create(&self, input: NewServiceCategory) -> Result<service_category::Model, ServiceError> {
            let model = input.into_model();
            self.created.lock().unwrap_or_else(|e| e.into_inner()).push(model.clone());
            Ok(model)
        }
    }
}
