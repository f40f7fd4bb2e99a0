//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in catalog-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod product;
mod user;

pub use product::PgProductRepository;
pub use user::PgUserRepository;
