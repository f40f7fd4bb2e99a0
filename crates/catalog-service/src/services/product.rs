//! Product service
//!
//! Handles product CRUD operations.

use catalog_core::entities::NewProduct;
use tracing::{info, instrument};

use crate::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().list().await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Get product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, product_id: i64) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))?;

        Ok(ProductResponse::from(&product))
    }

    /// Create a new product
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        let new_product = NewProduct::new(request.name, request.price);
        let product = self.ctx.product_repo().create(&new_product).await?;

        info!(product_id = %product.id, "Product created successfully");

        Ok(ProductResponse::from(&product))
    }

    /// Update an existing product; name and price always overwrite
    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        product_id: i64,
        request: UpdateProductRequest,
    ) -> ServiceResult<ProductResponse> {
        let mut product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))?;

        product.set_name(request.name);
        product.set_price(request.price);
        self.ctx.product_repo().update(&product).await?;

        info!(product_id = %product_id, "Product updated");

        Ok(ProductResponse::from(&product))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, product_id: i64) -> ServiceResult<()> {
        // Verify product exists before deleting
        let _product = self
            .ctx
            .product_repo()
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", product_id.to_string()))?;

        self.ctx.product_repo().delete(product_id).await?;
        info!(product_id = %product_id, "Product deleted");

        Ok(())
    }
}
