//! In-memory repository fakes for service-level tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use catalog_common::auth::JwtService;
use catalog_core::entities::{NewProduct, NewUser, Product, User};
use catalog_core::error::DomainError;
use catalog_core::traits::{ProductRepository, RepoResult, UserRepository};
use catalog_db::PgPool;

use super::context::ServiceContext;

/// In-memory UserRepository backed by a mutex-guarded vector
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<(User, String)>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().map(|(u, _)| u.clone()).collect())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|(u, _)| u.email == email))
    }

    async fn create(&self, new_user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|(u, _)| u.email == new_user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push((user.clone(), password_hash.to_string()));
        Ok(user)
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == user.id)
            .ok_or(DomainError::UserNotFound(user.id))?;
        entry.0 = user.clone();
        Ok(())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let entry = users
            .iter_mut()
            .find(|(u, _)| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        entry.1 = password_hash.to_string();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|(u, _)| u.id != id);
        if users.len() == before {
            return Err(DomainError::UserNotFound(id));
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

/// In-memory ProductRepository backed by a mutex-guarded vector
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.clone())
    }

    async fn create(&self, new_product: &NewProduct) -> RepoResult<Product> {
        let mut products = self.products.lock().unwrap();
        let now = Utc::now();
        let product = Product {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_product.name.clone(),
            price: new_product.price,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: &Product) -> RepoResult<()> {
        let mut products = self.products.lock().unwrap();
        let entry = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(DomainError::ProductNotFound(product.id))?;
        *entry = product.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(DomainError::ProductNotFound(id));
        }
        Ok(())
    }
}

/// Build a ServiceContext backed by in-memory repositories
///
/// The pool is lazy and never connected; readiness checks are not exercised
/// by service-level tests.
pub fn test_context() -> ServiceContext {
    let pool = PgPool::connect_lazy("postgresql://localhost:5432/catalog_test")
        .expect("lazy pool construction cannot fail");

    ServiceContext::new(
        pool,
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryProductRepository::new()),
        Arc::new(JwtService::new("test-secret-key-that-is-long-enough", 3600)),
    )
}
