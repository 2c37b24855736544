use rust_decimal::Decimal;

use crate::{
    dto::products::{ProductPayload, check_price},
    error::{AppError, AppResult},
    models::Product,
    repository::ProductRepository,
    routes::params::ProductQuery,
};

pub async fn list_products(
    repo: &dyn ProductRepository,
    query: ProductQuery,
) -> AppResult<Vec<Product>> {
    let products = repo.search(&query).await?;
    tracing::debug!(
        count = products.len(),
        name = ?query.name,
        sort_by = ?query.sort_by,
        "products listed"
    );
    Ok(products)
}

pub async fn get_product(repo: &dyn ProductRepository, id: i32) -> AppResult<Product> {
    match repo.get_by_id(id).await? {
        Some(product) => Ok(product),
        None => Err(AppError::NotFound),
    }
}

pub async fn create_product(
    repo: &dyn ProductRepository,
    payload: ProductPayload,
) -> AppResult<Product> {
    let new_product = payload.validate()?;
    let product = repo.add(new_product).await?;
    tracing::info!(product_id = product.id, "product created");
    Ok(product)
}

pub async fn update_product(
    repo: &dyn ProductRepository,
    id: i32,
    payload: ProductPayload,
) -> AppResult<()> {
    let changes = payload.validate()?;
    let mut existing = get_product(repo, id).await?;

    existing.name = changes.name;
    existing.description = changes.description;
    existing.price = changes.price;

    repo.update(&existing).await?;
    tracing::info!(product_id = id, "product updated");
    Ok(())
}

pub async fn update_product_price(
    repo: &dyn ProductRepository,
    id: i32,
    price: Decimal,
) -> AppResult<()> {
    let price = check_price(price).map_err(|message| AppError::invalid_field("price", message))?;
    let mut existing = get_product(repo, id).await?;

    existing.price = price;

    repo.update(&existing).await?;
    tracing::info!(product_id = id, %price, "product price updated");
    Ok(())
}

pub async fn delete_product(repo: &dyn ProductRepository, id: i32) -> AppResult<()> {
    get_product(repo, id).await?;
    repo.delete(id).await?;
    tracing::info!(product_id = id, "product deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;

    fn pen() -> ProductPayload {
        ProductPayload {
            id: Some(99),
            name: Some("Pen".into()),
            description: Some("Blue pen".into()),
            price: Some(Decimal::new(15, 1)),
        }
    }

    #[tokio::test]
    async fn create_ignores_client_id_and_round_trips() {
        let repo = InMemoryProductRepository::new();
        let created = create_product(&repo, pen()).await.unwrap();
        assert_eq!(created.id, 1);

        let fetched = get_product(&repo, created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn price_patch_leaves_other_fields_alone() {
        let repo = InMemoryProductRepository::new();
        let created = create_product(&repo, pen()).await.unwrap();

        update_product_price(&repo, created.id, Decimal::new(3, 0))
            .await
            .unwrap();

        let fetched = get_product(&repo, created.id).await.unwrap();
        assert_eq!(fetched.price, Decimal::new(3, 0));
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.description, created.description);
    }

    #[tokio::test]
    async fn negative_price_patch_is_rejected_before_lookup() {
        let repo = InMemoryProductRepository::new();
        let err = update_product_price(&repo, 1, Decimal::new(-5, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_validates_before_checking_existence() {
        let repo = InMemoryProductRepository::new();
        let err = update_product(&repo, 1, ProductPayload::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = update_product(&repo, 1, pen()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let created = create_product(&repo, pen()).await.unwrap();

        delete_product(&repo, created.id).await.unwrap();

        assert!(matches!(
            get_product(&repo, created.id).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            delete_product(&repo, created.id).await,
            Err(AppError::NotFound)
        ));
    }
}
