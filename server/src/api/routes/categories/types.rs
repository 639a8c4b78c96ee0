//! Category API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::CategoryRow;

/// Category DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDto {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
}

impl From<CategoryRow> for CategoryDto {
    fn from(row: CategoryRow) -> Self {
        Self {
            category_id: row.category_id,
            name: row.name,
            description: row.description,
            parent_category_id: row.parent_category_id,
        }
    }
}

/// Request body for get_category and delete_category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryNameRequest {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name: String,
}

/// Request body for create_category
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
}

/// Response body for create_category
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCategoryResponse {
    pub category_id: i64,
}

/// Request body for update_category (addressed by name)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
}
