//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, health, products, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (mounted at the root, outside /api)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(product_routes())
}

/// User routes (login and registration are the only open endpoints)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/login", post(auth::login))
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", put(users::update_user))
        .route("/users/:user_id", delete(users::delete_user))
}

/// Product routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/products", post(products::create_product))
        .route("/products/:product_id", get(products::get_product))
        .route("/products/:product_id", put(products::update_product))
        .route("/products/:product_id", delete(products::delete_product))
}
