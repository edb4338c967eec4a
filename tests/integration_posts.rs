mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{auth_token, body_json, create_test_post, create_test_user, setup_test_app};
use inkpost::modules::users::model::UserRole;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn authed_json(method: &str, uri: &str, user_id: Uuid, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn authed(method: &str, uri: &str, user_id: Uuid) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", auth_token(user_id)))
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_then_fetch_roundtrip(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/v1/posts",
            author.id,
            json!({ "title": "Hello", "content": "World!!", "is_hidden": false }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["author_id"], author.id.to_string());

    let response = app
        .oneshot(authed("GET", &format!("/api/v1/posts/{id}"), author.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["title"], "Hello");
    assert_eq!(fetched["content"], "World!!");
    assert_eq!(fetched["is_hidden"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_requires_token(pool: PgPool) {
    let app = setup_test_app(pool);

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/posts")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Hello", "content": "World!!" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "AUTH_MISSING");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_post_validation(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let app = setup_test_app(pool);

    let short_title = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/api/v1/posts",
            author.id,
            json!({ "title": "ab", "content": "World!!" }),
        ))
        .await
        .unwrap();
    assert_eq!(short_title.status(), StatusCode::BAD_REQUEST);

    let oversized_content = app
        .oneshot(authed_json(
            "POST",
            "/api/v1/posts",
            author.id,
            json!({ "title": "Hello", "content": "x".repeat(301) }),
        ))
        .await
        .unwrap();
    assert_eq!(oversized_content.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_own_posts_includes_hidden(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    create_test_post(&pool, author.id, "visible post", false).await;
    create_test_post(&pool, author.id, "hidden post", true).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed("GET", "/api/v1/posts", author.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let posts = body_json(response).await;
    assert_eq!(posts.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_hidden_post_is_masked_as_not_found(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let stranger = create_test_user(&pool, UserRole::Blogger).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    let post_id = create_test_post(&pool, author.id, "hidden post", true).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/v1/posts/{post_id}");

    let as_stranger = app
        .clone()
        .oneshot(authed("GET", &uri, stranger.id))
        .await
        .unwrap();
    assert_eq!(as_stranger.status(), StatusCode::NOT_FOUND);

    // Identical response shape as a genuinely absent post.
    let absent = app
        .clone()
        .oneshot(authed(
            "GET",
            &format!("/api/v1/posts/{}", Uuid::new_v4()),
            stranger.id,
        ))
        .await
        .unwrap();
    assert_eq!(absent.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(as_stranger).await, body_json(absent).await);

    let as_author = app
        .clone()
        .oneshot(authed("GET", &uri, author.id))
        .await
        .unwrap();
    assert_eq!(as_author.status(), StatusCode::OK);

    let as_admin = app.oneshot(authed("GET", &uri, admin.id)).await.unwrap();
    assert_eq!(as_admin.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_user_posts_filters_hidden_for_strangers(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let stranger = create_test_user(&pool, UserRole::Blogger).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    create_test_post(&pool, author.id, "visible post", false).await;
    create_test_post(&pool, author.id, "hidden post", true).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/v1/posts/user/{}", author.id);

    let as_stranger = app
        .clone()
        .oneshot(authed("GET", &uri, stranger.id))
        .await
        .unwrap();
    let posts = body_json(as_stranger).await;
    let posts = posts.as_array().unwrap().clone();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"], "visible post");

    let as_author = app
        .clone()
        .oneshot(authed("GET", &uri, author.id))
        .await
        .unwrap();
    assert_eq!(body_json(as_author).await.as_array().unwrap().len(), 2);

    let as_admin = app.oneshot(authed("GET", &uri, admin.id)).await.unwrap();
    assert_eq!(body_json(as_admin).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_is_partial(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let post_id = create_test_post(&pool, author.id, "original title", false).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed_json(
            "PUT",
            "/api/v1/posts",
            author.id,
            json!({ "id": post_id, "title": "updated title" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["title"], "updated title");
    // Omitted fields keep their previous values.
    assert_eq!(updated["content"], "some test content");
    assert_eq!(updated["is_hidden"], false);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_by_non_owner_is_forbidden(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let stranger = create_test_user(&pool, UserRole::Blogger).await;
    let post_id = create_test_post(&pool, author.id, "original title", false).await;
    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            "/api/v1/posts",
            stranger.id,
            json!({ "id": post_id, "title": "hijacked title" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], "AUTH_FORBIDDEN");

    // The row is unchanged.
    let response = app
        .oneshot(authed("GET", &format!("/api/v1/posts/{post_id}"), author.id))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["title"], "original title");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_updates_any_post(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    let post_id = create_test_post(&pool, author.id, "original title", false).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed_json(
            "PUT",
            "/api/v1/posts",
            admin.id,
            json!({ "id": post_id, "is_hidden": true }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["is_hidden"], true);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_absent_post_is_not_found(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed_json(
            "PUT",
            "/api/v1/posts",
            author.id,
            json!({ "id": Uuid::new_v4(), "title": "updated title" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_by_owner(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let post_id = create_test_post(&pool, author.id, "doomed post", false).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/v1/posts/{post_id}");

    let response = app
        .clone()
        .oneshot(authed("DELETE", &uri, author.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(authed("GET", &uri, author.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_by_non_owner_is_forbidden(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let stranger = create_test_user(&pool, UserRole::Blogger).await;
    let post_id = create_test_post(&pool, author.id, "protected post", false).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed(
            "DELETE",
            &format!("/api/v1/posts/{post_id}"),
            stranger.id,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_deletes_any_post(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let admin = create_test_user(&pool, UserRole::Admin).await;
    let post_id = create_test_post(&pool, author.id, "doomed post", false).await;
    let app = setup_test_app(pool);

    let response = app
        .oneshot(authed(
            "DELETE",
            &format!("/api/v1/posts/{post_id}"),
            admin.id,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_absent_post_is_not_found_every_time(pool: PgPool) {
    let author = create_test_user(&pool, UserRole::Blogger).await;
    let app = setup_test_app(pool);

    let uri = format!("/api/v1/posts/{}", Uuid::new_v4());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(authed("DELETE", &uri, author.id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "POST_NOT_FOUND");
    }
}
