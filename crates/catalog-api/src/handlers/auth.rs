//! Authentication handlers
//!
//! Endpoint for email/password login.

use axum::{extract::State, Json};
use catalog_service::{AuthService, LoginRequest, TokenResponse};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with email and password
///
/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
