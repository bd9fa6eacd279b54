use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::store::Record;

/// Category record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Category {
    /// Category identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Category name
    #[schema(example = "Salary")]
    pub name: String,
    /// Category type, usually "income" or "expense"
    #[serde(rename = "type")]
    #[schema(example = "income")]
    pub category_type: String,
    /// Free-form description
    #[schema(example = "Monthly pay")]
    pub description: String,
}

impl Record for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Categories present on every fresh start.
pub fn fixtures() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Salary".to_string(),
            category_type: "income".to_string(),
            description: "Monthly pay".to_string(),
        },
        Category {
            id: 2,
            name: "Groceries".to_string(),
            category_type: "expense".to_string(),
            description: "Supermarket shopping".to_string(),
        },
    ]
}

/// Request body for creating a category. Every field must be a non-empty string.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(required, length(min = 1))]
    #[schema(example = "Entertainment")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    #[validate(required, length(min = 1))]
    #[schema(example = "expense")]
    pub category_type: Option<String>,

    #[validate(required, length(min = 1))]
    #[schema(example = "Movies")]
    pub description: Option<String>,
}

/// Request body for updating a category (PUT - empty or missing fields are left unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCategoryDto {
    #[schema(example = "Salary (after raise)")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub category_type: Option<String>,

    pub description: Option<String>,
}

impl UpdateCategoryDto {
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name.filter(|v| !v.is_empty()) {
            category.name = name;
        }
        if let Some(category_type) = self.category_type.filter(|v| !v.is_empty()) {
            category.category_type = category_type;
        }
        if let Some(description) = self.description.filter(|v| !v.is_empty()) {
            category.description = description;
        }
    }
}
