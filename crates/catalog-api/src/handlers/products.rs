//! Product handlers
//!
//! Endpoints for product management.

use axum::{
    extract::{Path, State},
    Json,
};
use catalog_service::{CreateProductRequest, ProductResponse, ProductService, UpdateProductRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get all products
///
/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let response = service.list_products().await?;
    Ok(Json(response))
}

/// Get product by ID
///
/// GET /api/products/{product_id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<i64>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.get_product(product_id).await?;
    Ok(Json(response))
}

/// Create a new product
///
/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let response = service.create_product(request).await?;
    Ok(Created(Json(response)))
}

/// Update an existing product
///
/// PUT /api/products/{product_id}
pub async fn update_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    let response = service.update_product(product_id, request).await?;
    Ok(Json(response))
}

/// Delete a product
///
/// DELETE /api/products/{product_id}
pub async fn delete_product(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(product_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ProductService::new(state.service_context());
    service.delete_product(product_id).await?;
    Ok(NoContent)
}
