use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Select,
    sea_query::{Expr, LikeExpr},
};

use crate::{
    entity::products::{ActiveModel, Column, Entity as Products},
    models::{NewProduct, Product},
    routes::params::{ProductQuery, ProductSortBy},
};

use super::{ProductRepository, RepositoryError, RepositoryResult};

const LIKE_ESCAPE: char = '\\';
// Byte-wise ordering, independent of the database's default collation.
const NAME_BYTE_ORDER: &str = r#""products"."name" COLLATE "C""#;

/// sea-orm backed repository. The connection is a pool; each call checks out a
/// connection for the duration of its single statement.
#[derive(Debug)]
pub struct SeaOrmProductRepository {
    conn: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        let rows = Products::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        let row = Products::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Product::from))
    }

    async fn add(&self, product: NewProduct) -> RepositoryResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
        };
        let model = active.insert(&self.conn).await?;
        Ok(model.into())
    }

    async fn update(&self, product: &Product) -> RepositoryResult<Product> {
        let active = ActiveModel {
            id: Unchanged(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
        };
        match active.update(&self.conn).await {
            Ok(model) => Ok(model.into()),
            // The row was deleted after the caller looked it up.
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn search(&self, query: &ProductQuery) -> RepositoryResult<Vec<Product>> {
        let rows = search_select(query).all(&self.conn).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

/// Filter and ordering pushed down into SQL. Ties are broken by id so the result
/// matches a stable in-memory sort over primary key order.
pub fn search_select(query: &ProductQuery) -> Select<Products> {
    let mut select = Products::find();

    if let Some(needle) = query.name_filter() {
        let pattern = format!("%{}%", escape_like(needle));
        select = select.filter(Column::Name.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)));
    }

    select = match query.sort_by {
        Some(ProductSortBy::Price) => select.order_by_asc(Column::Price),
        Some(ProductSortBy::Name) => select.order_by(Expr::cust(NAME_BYTE_ORDER), Order::Asc),
        None => select,
    };

    select.order_by_asc(Column::Id)
}

/// Makes `%`, `_` and the escape character itself match literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
