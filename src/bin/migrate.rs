use axum_product_api::{
    config::AppConfig,
    db::{create_orm_conn, sync_schema},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    sync_schema(&orm).await?;
    println!("Schema synchronized");
    Ok(())
}
