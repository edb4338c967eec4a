//! User data models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// System roles. Admins have unrestricted read/write across all users and
/// posts; bloggers own and manage only their own posts.
#[derive(Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Blogger,
}

/// A user row. The password hash never leaves the service layer; this struct
/// deliberately has no field for it.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for self-registration. Always produces a blogger.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RegisterUserDto {
    #[validate(length(min = 3, max = 30, message = "name must be between 3 and 30 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 3, message = "password must be at least 3 characters"))]
    pub password: String,
}

/// DTO for admin-initiated user creation; unlike registration, the role may
/// be set explicitly.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 30, message = "name must be between 3 and 30 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 3, message = "password must be at least 3 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginUserDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// One entry of the user listing. `id` is only present for admin callers;
/// for everyone else the field is omitted from the JSON entirely.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
}
