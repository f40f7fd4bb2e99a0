//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from a bearer JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Subject email from the JWT token
    pub email: String,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(email: String) -> Self {
        Self { email }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token; expired and malformed tokens are not
        // distinguished at this boundary
        let claims = app_state
            .jwt_service()
            .validate(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        Ok(AuthUser::new(claims.sub))
    }
}
