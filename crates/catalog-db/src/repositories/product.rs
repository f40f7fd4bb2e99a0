//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use catalog_core::entities::{NewProduct, Product};
use catalog_core::traits::{ProductRepository, RepoResult};

use crate::models::ProductModel;

use super::error::{map_db_error, product_not_found};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Create a new PgProductRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, price, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Product>> {
        let result = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, price, created_at, updated_at
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, new_product: &NewProduct) -> RepoResult<Product> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            INSERT INTO products (name, price, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, name, price, created_at, updated_at
            ",
        )
        .bind(&new_product.name)
        .bind(new_product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Product::from(model))
    }

    #[instrument(skip(self))]
    async fn update(&self, product: &Product) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = $2, price = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(product.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM products WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }
}
