//! Storage seam for products.
//!
//! Handlers talk to a [`ProductRepository`] trait object held in the application state.
//! [`SeaOrmProductRepository`] is the PostgreSQL-backed implementation used by the
//! server; [`InMemoryProductRepository`] keeps everything in a map and backs the
//! router tests.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    models::{NewProduct, Product},
    routes::params::{ProductQuery, ProductSortBy},
};

pub mod memory;
pub mod orm;

pub use memory::InMemoryProductRepository;
pub use orm::SeaOrmProductRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub type DynProductRepository = Arc<dyn ProductRepository>;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in primary key order.
    async fn get_all(&self) -> RepositoryResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;

    /// Stores `product` under a fresh id and returns the stored record.
    async fn add(&self, product: NewProduct) -> RepositoryResult<Product>;

    /// Overwrites name, description and price of the row with `product.id`.
    /// Fails with [`RepositoryError::NotFound`] when that row no longer exists.
    async fn update(&self, product: &Product) -> RepositoryResult<Product>;

    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    /// Name filter plus optional ordering. The default materializes
    /// [`get_all`](Self::get_all) and works in memory.
    async fn search(&self, query: &ProductQuery) -> RepositoryResult<Vec<Product>> {
        let products = self.get_all().await?;
        Ok(apply_query(products, query))
    }
}

/// In-memory filter and sort over an already materialized list.
pub fn apply_query(products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    let mut products: Vec<Product> = match query.name_filter() {
        Some(needle) => products
            .into_iter()
            .filter(|p| p.name.contains(needle))
            .collect(),
        None => products,
    };

    match query.sort_by {
        Some(ProductSortBy::Price) => products.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(ProductSortBy::Name) => products.sort_by(|a, b| a.name.cmp(&b.name)),
        None => {}
    }

    products
}
