//! Product database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the products table
#[derive(Debug, Clone, FromRow)]
pub struct ProductModel {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
