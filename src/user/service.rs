use tracing::{debug, info};

use super::models::{CreateUserDto, UpdateUserDto, User};
use crate::errors::{AppError, ErrorKey};
use crate::extractors::RecordId;
use crate::store::MemoryStore;

pub type UserStore = MemoryStore<User>;

pub(super) const ERROR_KEY: ErrorKey = ErrorKey::Error;

fn not_found() -> AppError {
    AppError::not_found(ERROR_KEY, "User not found")
}

/// Users reject ids without a leading integer instead of treating them as
/// unknown.
fn require_valid_id(id: &RecordId) -> Result<i64, AppError> {
    id.value.ok_or_else(|| {
        debug!(raw = %id.raw, "User id is not an integer");
        AppError::bad_request(ERROR_KEY, "Invalid user ID")
    })
}

/// Service layer for user business logic.
pub struct UserService;

impl UserService {
    pub async fn list_users(store: &UserStore) -> Vec<User> {
        store.list().await
    }

    pub async fn get_user(store: &UserStore, id: &RecordId) -> Result<User, AppError> {
        let id = require_valid_id(id)?;
        store.get(id).await.ok_or_else(not_found)
    }

    pub async fn create_user(store: &UserStore, dto: CreateUserDto) -> Result<User, AppError> {
        let (Some(username), Some(email), Some(birthday)) = (
            dto.username.filter(|v| !v.is_empty()),
            dto.email.filter(|v| !v.is_empty()),
            dto.birthday.filter(|v| !v.is_empty()),
        ) else {
            return Err(AppError::missing_fields(ERROR_KEY));
        };

        let user = store
            .insert(|id| User {
                id,
                username,
                email,
                birthday,
            })
            .await;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub async fn update_user(
        store: &UserStore,
        id: &RecordId,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let id = require_valid_id(id)?;
        let user = store
            .update(id, |user| dto.apply_to(user))
            .await
            .ok_or_else(not_found)?;

        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    pub async fn delete_user(store: &UserStore, id: &RecordId) -> Result<(), AppError> {
        let id = require_valid_id(id)?;
        store.delete(id).await.ok_or_else(not_found)?;

        info!(user_id = id, "User deleted");
        Ok(())
    }
}
