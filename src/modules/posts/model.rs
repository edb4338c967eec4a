//! Post data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A post row. `author_id` references the owning user; many posts per user.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Hidden posts are visible only to their author and admins.
    pub is_hidden: bool,
    pub author_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 3, max = 30, message = "title must be between 3 and 30 characters"))]
    pub title: String,
    #[validate(length(
        min = 3,
        max = 300,
        message = "content must be between 3 and 300 characters"
    ))]
    pub content: String,
    #[serde(default)]
    pub is_hidden: Option<bool>,
}

/// Partial update: omitted fields keep their previous values.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdatePostDto {
    pub id: Uuid,
    #[validate(length(min = 3, max = 30, message = "title must be between 3 and 30 characters"))]
    pub title: Option<String>,
    #[validate(length(
        min = 3,
        max = 300,
        message = "content must be between 3 and 300 characters"
    ))]
    pub content: Option<String>,
    pub is_hidden: Option<bool>,
}
