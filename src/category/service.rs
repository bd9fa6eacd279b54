use std::fmt::Display;

use tracing::info;

use super::models::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::errors::{AppError, ErrorKey};
use crate::extractors::parse_leading_int;
use crate::store::MemoryStore;

pub type CategoryStore = MemoryStore<Category>;

pub(super) const ERROR_KEY: ErrorKey = ErrorKey::Message;

fn not_found() -> AppError {
    AppError::not_found(ERROR_KEY, "Category not found")
}

/// Looks up a category by any id-like value.
///
/// Never fails: an id that is not numeric, or that matches no category, gives
/// `None`.
pub async fn get_category_by_id(store: &CategoryStore, id: impl Display) -> Option<Category> {
    let id = parse_leading_int(&id.to_string())?;
    store.get(id).await
}

/// Service layer for category business logic.
pub struct CategoryService;

impl CategoryService {
    pub async fn list(store: &CategoryStore) -> Vec<Category> {
        store.list().await
    }

    pub async fn get_by_id(store: &CategoryStore, id: Option<i64>) -> Result<Category, AppError> {
        match id {
            Some(id) => get_category_by_id(store, id).await.ok_or_else(not_found),
            None => Err(not_found()),
        }
    }

    pub async fn create(store: &CategoryStore, dto: CreateCategoryDto) -> Result<Category, AppError> {
        let (Some(name), Some(category_type), Some(description)) = (
            dto.name.filter(|v| !v.is_empty()),
            dto.category_type.filter(|v| !v.is_empty()),
            dto.description.filter(|v| !v.is_empty()),
        ) else {
            return Err(AppError::missing_fields(ERROR_KEY));
        };

        let category = store
            .insert(|id| Category {
                id,
                name,
                category_type,
                description,
            })
            .await;

        info!(category_id = category.id, "Category created");
        Ok(category)
    }

    pub async fn update(
        store: &CategoryStore,
        id: Option<i64>,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        let id = id.ok_or_else(not_found)?;
        let category = store
            .update(id, |category| dto.apply_to(category))
            .await
            .ok_or_else(not_found)?;

        info!(category_id = category.id, "Category updated");
        Ok(category)
    }

    pub async fn delete(store: &CategoryStore, id: Option<i64>) -> Result<(), AppError> {
        let id = id.ok_or_else(not_found)?;
        store.delete(id).await.ok_or_else(not_found)?;

        info!(category_id = id, "Category deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::models::fixtures;
    use crate::store::IdAllocation;

    fn store() -> CategoryStore {
        CategoryStore::new(fixtures(), IdAllocation::Length)
    }

    #[actix_rt::test]
    async fn test_lookup_returns_matching_category() {
        let store = store();
        let category = get_category_by_id(&store, 2).await.expect("Should find id 2");
        assert_eq!(category.name, "Groceries");
        assert_eq!(get_category_by_id(&store, 1).await, Some(fixtures().remove(0)));
    }

    #[actix_rt::test]
    async fn test_lookup_returns_none_for_unknown_id() {
        assert_eq!(get_category_by_id(&store(), 999).await, None);
    }

    #[actix_rt::test]
    async fn test_lookup_returns_none_for_non_numeric_input() {
        assert_eq!(get_category_by_id(&store(), "invalid").await, None);
        assert_eq!(get_category_by_id(&store(), "").await, None);
    }

    #[actix_rt::test]
    async fn test_get_by_id_without_numeric_id_is_not_found() {
        let err = CategoryService::get_by_id(&store(), None).await.unwrap_err();
        assert_eq!(err, AppError::not_found(ErrorKey::Message, "Category not found"));
    }

    #[actix_rt::test]
    async fn test_create_with_missing_field_leaves_store_unchanged() {
        let store = store();
        let dto = CreateCategoryDto {
            name: Some("Travel".to_string()),
            category_type: None,
            description: None,
        };

        let err = CategoryService::create(&store, dto).await.unwrap_err();

        assert_eq!(err, AppError::missing_fields(ErrorKey::Message));
        assert_eq!(store.len().await, 2);
    }

    #[actix_rt::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = store();
        assert!(CategoryService::delete(&store, Some(999)).await.is_err());
        assert_eq!(store.len().await, 2);
    }
}
