//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewProduct, NewUser, Product, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email (exact match, case-sensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List all users
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user; the store assigns the id
    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update an existing user's name and email
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>>;

    /// List all products
    async fn list(&self) -> RepoResult<Vec<Product>>;

    /// Create a new product; the store assigns the id
    async fn create(&self, new_product: &NewProduct) -> RepoResult<Product>;

    /// Update an existing product's name and price
    async fn update(&self, product: &Product) -> RepoResult<()>;

    /// Delete a product
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
