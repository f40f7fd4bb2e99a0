//! User entity <-> model mapper

use catalog_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity (password hash is intentionally dropped)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
