//! User handlers
//!
//! Endpoints for user management.

use axum::{
    extract::{Path, State},
    Json,
};
use catalog_service::{CreateUserRequest, UpdateUserRequest, UserResponse, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users().await?;
    Ok(Json(response))
}

/// Get user by ID
///
/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Create a new user
///
/// POST /api/users
///
/// Open endpoint: this is how accounts are registered.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(request).await?;
    Ok(Created(Json(response)))
}

/// Update an existing user
///
/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_user(user_id, request).await?;
    Ok(Json(response))
}

/// Delete a user
///
/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(NoContent)
}
