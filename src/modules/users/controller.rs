use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::middleware::auth::AuthSession;
use crate::middleware::role::RequireAdmin;
use crate::modules::users::model::{
    CreateUserDto, LoginUserDto, RegisterUserDto, TokenResponse, UserRole, UserSummary,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

/// Register a new account. Self-registration always creates a blogger.
#[utoipa::path(
    post,
    path = "/api/v1/users/register",
    request_body = RegisterUserDto,
    responses(
        (status = 204, description = "User registered successfully"),
        (status = 400, description = "Validation error or name/email already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<StatusCode, AppError> {
    UserService::create_user(&state.db, UserRole::Blogger, &dto.name, &dto.email, &dto.password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(dto))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginUserDto>,
) -> Result<Json<TokenResponse>, AppError> {
    let response = UserService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// List users, filtered by the caller's role
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Role-filtered user listing", body = Vec<UserSummary>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(session))]
pub async fn list_users(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = UserService::list_users(&state.db, &session.user).await?;
    Ok(Json(users))
}

/// Create a user of any role (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserDto,
    responses(
        (status = 204, description = "User created successfully"),
        (status = 400, description = "Validation error or name/email already used", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(dto))]
pub async fn create_user(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<StatusCode, AppError> {
    let role = dto.role.unwrap_or(UserRole::Blogger);
    UserService::create_user(&state.db, role, &dto.name, &dto.email, &dto.password).await?;
    Ok(StatusCode::NO_CONTENT)
}
