//! # catalog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used request types
pub use dto::requests::{
    CreateProductRequest, CreateUserRequest, LoginRequest, UpdateProductRequest,
    UpdateUserRequest,
};

// Re-export commonly used response types
pub use dto::responses::{
    HealthChecks, HealthResponse, ProductResponse, ReadinessResponse, TokenResponse,
    UserResponse,
};

// Re-export services
pub use services::{
    AuthService, ProductService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
