//! User service
//!
//! Handles user CRUD operations.

use catalog_common::auth::hash_password;
use catalog_core::entities::NewUser;
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Create a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        // Check if email already exists
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser::new(request.name, request.email);
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User created successfully");

        Ok(UserResponse::from(&user))
    }

    /// Update an existing user
    ///
    /// Name and email always overwrite the stored values; the password is
    /// only replaced when a non-empty value is supplied.
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        user.set_name(request.name);
        user.set_email(request.email);
        self.ctx.user_repo().update(&user).await?;

        if let Some(password) = request.password.filter(|p| !p.is_empty()) {
            let password_hash =
                hash_password(&password).map_err(|e| ServiceError::internal(e.to_string()))?;
            self.ctx
                .user_repo()
                .update_password(user_id, &password_hash)
                .await?;
        }

        info!(user_id = %user_id, "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64) -> ServiceResult<()> {
        // Verify user exists before deleting
        let _user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "User deleted");

        Ok(())
    }
}
