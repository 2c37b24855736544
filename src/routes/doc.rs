use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::products::ProductPayload,
    models::Product,
    response::{MessageBody, ValidationErrorBody},
    routes::{health, products},
};

pub const DOCS_PATH: &str = "/docs";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::list_sorted_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::update_product_price,
        products::delete_product,
    ),
    components(
        schemas(
            Product,
            ProductPayload,
            MessageBody,
            ValidationErrorBody,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url(DOCS_PATH, ApiDoc::openapi())
}
