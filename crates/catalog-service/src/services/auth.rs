//! Authentication service
//!
//! Credential verification and token issuance for the login endpoint.

use catalog_common::auth::verify_password;
use catalog_common::AppError;
use catalog_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Verify an email/password pair against the account store
    ///
    /// Unknown email, missing hash, and wrong password are deliberately
    /// indistinguishable to the caller: all collapse to
    /// `AppError::InvalidCredentials` so responses leak nothing about which
    /// part was wrong.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn verify_credentials(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        Ok(user)
    }

    /// Login with email and password, issuing a signed token on success
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .verify_credentials(&request.email, &request.password)
            .await?;

        let token = self
            .ctx
            .jwt_service()
            .issue(&user.email)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(TokenResponse::new(token))
    }

    /// Validate a token and return the subject email
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<String> {
        let claims = self
            .ctx
            .jwt_service()
            .validate(token)
            .map_err(ServiceError::from)?;

        Ok(claims.sub)
    }
}
