use std::sync::Arc;

use axum::extract::FromRef;

use crate::repository::{DynProductRepository, ProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub products: DynProductRepository,
}

impl AppState {
    pub fn new(products: impl ProductRepository + 'static) -> Self {
        Self {
            products: Arc::new(products),
        }
    }
}

impl FromRef<AppState> for DynProductRepository {
    fn from_ref(state: &AppState) -> Self {
        state.products.clone()
    }
}
