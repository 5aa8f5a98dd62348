//! 产品 Repository trait 与内存实现

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::model::{NewProduct, Product, ProductChanges};
use crate::core::error::RepositoryError;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 查询全部产品
    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;

    /// 根据 ID 查找产品
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    /// 保存新产品，由存储分配 ID 与创建时间
    async fn insert(&self, product: &NewProduct) -> RepositoryResult<Product>;

    /// 部分更新，产品不存在时返回 `None`
    async fn update(&self, id: i64, changes: &ProductChanges) -> RepositoryResult<Option<Product>>;

    /// 删除产品，返回是否删除了记录
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;

    /// 存储连通性检查
    async fn ping(&self) -> RepositoryResult<()>;
}

/// 内存存储，用于测试与本地运行
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<MemoryTable>,
}

#[derive(Debug, Default)]
struct MemoryTable {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let table = self.inner.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> RepositoryResult<Product> {
        let mut table = self.inner.write().await;
        table.last_id += 1;

        let row = Product {
            id: table.last_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            available: product.available,
            created_at: Utc::now(),
        };
        table.rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn update(&self, id: i64, changes: &ProductChanges) -> RepositoryResult<Option<Product>> {
        let mut table = self.inner.write().await;
        Ok(table.rows.get_mut(&id).map(|row| {
            changes.apply_to(row);
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut table = self.inner.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
