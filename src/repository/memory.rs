use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{NewProduct, Product};

use super::{ProductRepository, RepositoryError, RepositoryResult};

/// Map-backed store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    rows: BTreeMap<i32, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let store = self.inner.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        let store = self.inner.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn add(&self, product: NewProduct) -> RepositoryResult<Product> {
        let mut store = self.inner.write().await;
        store.last_id += 1;
        let product = product.with_id(store.last_id);
        store.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> RepositoryResult<Product> {
        let mut store = self.inner.write().await;
        let row = store
            .rows
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        row.name = product.name.clone();
        row.description = product.description.clone();
        row.price = product.price;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let mut store = self.inner.write().await;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
