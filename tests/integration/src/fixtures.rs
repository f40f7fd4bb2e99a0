//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    // Combine with the process id so parallel test runs cannot collide
    (u64::from(std::process::id()) << 20) | n
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "password123".to_string(),
        }
    }
}

/// Update user request
#[derive(Debug, Serialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_create(req: &CreateUserRequest) -> Self {
        Self {
            email: req.email.clone(),
            password: req.password.clone(),
        }
    }
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create product request
#[derive(Debug, Serialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl CreateProductRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Product {suffix}"),
            price: 100.0,
        }
    }
}

/// Update product request
#[derive(Debug, Serialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

/// Product response
#[derive(Debug, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
}
