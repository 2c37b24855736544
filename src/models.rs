use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::products::Model as ProductModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64, example = 1.5)]
    pub price: Decimal,
}

/// A validated product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn with_id(self, id: i32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}
