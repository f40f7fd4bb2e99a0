//! Product entity <-> model mapper

use catalog_core::entities::Product;

use crate::models::ProductModel;

/// Convert ProductModel to Product entity
impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
