use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthSession;
use crate::modules::posts::model::{CreatePostDto, Post, UpdatePostDto};
use crate::modules::posts::service::PostService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::utils::policy;
use crate::validator::ValidatedJson;

/// List the caller's own posts, hidden ones included
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "The caller's posts", body = Vec<Post>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session))]
pub async fn list_my_posts(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<Post>>, AppError> {
    let posts = PostService::list_by_author(&state.db, session.user.id, true).await?;
    Ok(Json(posts))
}

/// Create a post owned by the caller
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostDto,
    responses(
        (status = 200, description = "The created post", body = Post),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session, dto))]
pub async fn create_post(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(dto): ValidatedJson<CreatePostDto>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::create(&state.db, session.user.id, dto).await?;
    Ok(Json(post))
}

/// Partially update a post (owner or admin)
#[utoipa::path(
    put,
    path = "/api/v1/posts",
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "The updated post", body = Post),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session, dto))]
pub async fn update_post(
    State(state): State<AppState>,
    session: AuthSession,
    ValidatedJson(dto): ValidatedJson<UpdatePostDto>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::update(&state.db, &session.user, dto).await?;
    Ok(Json(post))
}

/// Fetch a single post by id
///
/// Hidden posts resolve to `404` for everyone but their author and admins,
/// with the same response shape as a genuinely absent post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Post not found or not visible", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session))]
pub async fn get_post(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    let post = PostService::get_visible(&state.db, id, &session.user).await?;
    Ok(Json(post))
}

/// Permanently delete a post (owner or admin)
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is neither owner nor admin", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session))]
pub async fn delete_post(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    PostService::delete(&state.db, &session.user, id).await?;
    Ok(StatusCode::OK)
}

/// List another user's posts
///
/// Hidden posts appear only when the caller is that user or an admin.
#[utoipa::path(
    get,
    path = "/api/v1/posts/user/{author_id}",
    params(("author_id" = Uuid, Path, description = "Author user id")),
    responses(
        (status = 200, description = "The author's visible posts", body = Vec<Post>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Posts"
)]
#[instrument(skip(session))]
pub async fn list_user_posts(
    State(state): State<AppState>,
    session: AuthSession,
    Path(author_id): Path<Uuid>,
) -> Result<Json<Vec<Post>>, AppError> {
    let include_hidden = policy::can_view_hidden(&session.user, author_id);
    let posts = PostService::list_by_author(&state.db, author_id, include_hidden).await?;
    Ok(Json(posts))
}
