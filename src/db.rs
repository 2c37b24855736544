use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::Products;

/// Create a pooled SeaORM connection.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Creates the `products` table from the entity definition when it is missing.
pub async fn sync_schema(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let mut create = schema.create_table_from_entity(Products);
    create.if_not_exists();
    conn.execute(backend.build(&create)).await?;
    tracing::debug!("schema synchronized");
    Ok(())
}
