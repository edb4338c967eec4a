use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::posts::model::{CreatePostDto, Post, UpdatePostDto};
use crate::modules::users::model::User;
use crate::utils::errors::{AppError, codes};
use crate::utils::policy;

pub struct PostService;

impl PostService {
    pub async fn create(db: &PgPool, author_id: Uuid, dto: CreatePostDto) -> Result<Post, AppError> {
        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, is_hidden, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, is_hidden, author_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.is_hidden.unwrap_or(false))
        .bind(author_id)
        .fetch_one(db)
        .await?;

        Ok(post)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Post>, AppError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, is_hidden, author_id, created_at, updated_at
             FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(post)
    }

    /// Lists an author's posts; hidden rows are included only when
    /// `include_hidden` is set (caller is the author or an admin).
    pub async fn list_by_author(
        db: &PgPool,
        author_id: Uuid,
        include_hidden: bool,
    ) -> Result<Vec<Post>, AppError> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, is_hidden, author_id, created_at, updated_at
             FROM posts
             WHERE author_id = $1 AND (is_hidden = FALSE OR $2)
             ORDER BY created_at",
        )
        .bind(author_id)
        .bind(include_hidden)
        .fetch_all(db)
        .await?;

        Ok(posts)
    }

    /// Single fetch with the visibility rule applied. A hidden post the
    /// caller may not see produces the same `404` as a post that does not
    /// exist, so hidden content cannot be probed for.
    pub async fn get_visible(db: &PgPool, id: Uuid, viewer: &User) -> Result<Post, AppError> {
        let post = Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(codes::POST_NOT_FOUND)))?;

        if post.is_hidden && !policy::can_view_hidden(viewer, post.author_id) {
            return Err(AppError::not_found(anyhow!(codes::POST_NOT_FOUND)));
        }

        Ok(post)
    }

    /// Partial update. The row is fetched and the caller authorized before
    /// the write, so a non-owner gets an explicit `403` instead of a write
    /// that silently matches nothing.
    pub async fn update(db: &PgPool, viewer: &User, dto: UpdatePostDto) -> Result<Post, AppError> {
        let post = Self::find_by_id(db, dto.id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(codes::POST_NOT_FOUND)))?;

        policy::authorize_mutation(viewer, post.author_id)?;

        let updated = sqlx::query_as::<_, Post>(
            "UPDATE posts
             SET title = COALESCE($2, title),
                 content = COALESCE($3, content),
                 is_hidden = COALESCE($4, is_hidden),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, title, content, is_hidden, author_id, created_at, updated_at",
        )
        .bind(dto.id)
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.is_hidden)
        .fetch_one(db)
        .await?;

        Ok(updated)
    }

    /// Permanent delete. Absent ids yield `404` on every attempt, never a
    /// server fault.
    pub async fn delete(db: &PgPool, viewer: &User, id: Uuid) -> Result<(), AppError> {
        let post = Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!(codes::POST_NOT_FOUND)))?;

        policy::authorize_mutation(viewer, post.author_id)?;

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
