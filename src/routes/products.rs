use axum::{
    Router,
    extract::{Query, State},
    http::{StatusCode, header},
    routing::get,
};
use rust_decimal::Decimal;

use crate::{
    dto::products::ProductPayload,
    error::AppResult,
    extract::{Json, Path},
    models::Product,
    repository::DynProductRepository,
    response::{MessageBody, ValidationErrorBody},
    routes::params::{ListParams, SortedListParams},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/list", get(list_sorted_products))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(update_product_price)
                .delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    params(ListParams),
    responses(
        (status = 200, description = "Products whose name contains the filter", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(repo): State<DynProductRepository>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::list_products(repo.as_ref(), params.into()).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/list",
    params(SortedListParams),
    responses(
        (status = 200, description = "Filtered products, optionally sorted by price or name", body = Vec<Product>)
    ),
    tag = "Products"
)]
pub async fn list_sorted_products(
    State(repo): State<DynProductRepository>,
    Query(params): Query<SortedListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::list_products(repo.as_ref(), params.into()).await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Get product", body = Product),
        (status = 404, description = "Product not found", body = MessageBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(repo): State<DynProductRepository>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = product_service::get_product(repo.as_ref(), id).await?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("location" = String, description = "URL of the new product"))),
        (status = 400, description = "Invalid product", body = ValidationErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(repo): State<DynProductRepository>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Product>)> {
    let product = product_service::create_product(repo.as_ref(), payload).await?;
    let location = format!("/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = ProductPayload,
    responses(
        (status = 204, description = "Product replaced"),
        (status = 400, description = "Invalid product", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = MessageBody),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(repo): State<DynProductRepository>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductPayload>,
) -> AppResult<StatusCode> {
    product_service::update_product(repo.as_ref(), id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = f64, description = "New price as a bare JSON number", content_type = "application/json"),
    responses(
        (status = 204, description = "Price updated"),
        (status = 400, description = "Invalid price", body = ValidationErrorBody),
        (status = 404, description = "Product not found", body = MessageBody),
    ),
    tag = "Products"
)]
pub async fn update_product_price(
    State(repo): State<DynProductRepository>,
    Path(id): Path<i32>,
    Json(price): Json<Decimal>,
) -> AppResult<StatusCode> {
    product_service::update_product_price(repo.as_ref(), id, price).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = MessageBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(repo): State<DynProductRepository>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(repo.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
