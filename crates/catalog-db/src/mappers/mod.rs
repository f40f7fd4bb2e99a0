//! Entity to model mappers
//!
//! Conversions from database models to domain entities
//! (`From<Model> for Entity`). The password hash is dropped at this
//! boundary; it never rides along with the `User` entity.

mod product;
mod user;
