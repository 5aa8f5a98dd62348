//! 产品业务服务

use std::sync::Arc;
use tracing::{info, warn};

use super::model::{NewProduct, Product, ProductChanges};
use super::repository::ProductRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, CoreError> {
        let created = self.repository.insert(&product).await?;
        info!("Created product: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn get(&self, id: i64) -> Result<Product, CoreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(CoreError::product_not_found)
    }

    pub async fn update(&self, id: i64, changes: ProductChanges) -> Result<Product, CoreError> {
        let updated = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or_else(CoreError::product_not_found)?;
        info!("Updated product: {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        if !self.repository.delete(id).await? {
            return Err(CoreError::product_not_found());
        }
        info!("Deleted product: {}", id);
        Ok(())
    }

    pub async fn health(&self) -> Result<(), CoreError> {
        self.repository.ping().await.map_err(|e| {
            warn!("Health check failed: {}", e);
            CoreError::ServiceUnavailable("Storage unavailable".to_string())
        })
    }
}
