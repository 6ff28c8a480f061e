//! Category-related DTOs for API requests and responses.

use crate::models::{Category, CategoryStatus, NewCategory, UpdateCategory};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a category.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    /// Opaque image reference (URL or embedded data)
    pub image: Option<String>,
    pub status: Option<CategoryStatus>,
}

impl CreateCategoryRequest {
    /// Converts the request DTO into a NewCategory for the acting provider.
    pub fn into_new_category(self, provider_id: i32) -> NewCategory {
        NewCategory {
            provider_id,
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status.unwrap_or(CategoryStatus::Active),
        }
    }
}

/// Request body for updating a category.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: Option<CategoryStatus>,
}

impl UpdateCategoryRequest {
    /// Converts the request DTO into an UpdateCategory changeset.
    pub fn into_update_category(self) -> UpdateCategory {
        UpdateCategory {
            title: self.title,
            description: self.description,
            image: self.image,
            status: self.status,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for category data.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: CategoryStatus,
    pub created_at: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            title: category.title,
            description: category.description,
            image: category.image,
            status: category.status,
            created_at: category
                .created_at
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }
}
