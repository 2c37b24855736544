use axum_product_api::{
    config::AppConfig,
    db::{create_orm_conn, sync_schema},
    models::NewProduct,
    repository::{ProductRepository, SeaOrmProductRepository},
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure the table exists.
    sync_schema(&orm).await?;

    let repo = SeaOrmProductRepository::new(orm);
    if !repo.get_all().await?.is_empty() {
        println!("Products already present, nothing to seed");
        return Ok(());
    }

    let products = [
        ("Ferris Mug", "Coffee tastes better with Ferris", Decimal::new(1200, 2)),
        ("Rust Sticker Pack", "Decorate your laptop", Decimal::new(500, 2)),
        ("Pen", "Blue pen", Decimal::new(150, 2)),
        ("Notebook", "A5, dotted", Decimal::new(450, 2)),
    ];

    for (name, description, price) in products {
        let product = repo
            .add(NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
            })
            .await?;
        println!("Seeded product {} ({})", product.id, product.name);
    }

    Ok(())
}
