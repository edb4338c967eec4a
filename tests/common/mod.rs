use axum::response::Response;
use http_body_util::BodyExt;
use inkpost::config::cors::CorsConfig;
use inkpost::config::jwt::JwtConfig;
use inkpost::modules::users::model::UserRole;
use inkpost::router::init_router;
use inkpost::state::AppState;
use inkpost::utils::jwt::create_token;
use inkpost::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec![],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Inserts a user directly, bypassing the HTTP surface.
pub async fn create_test_user(pool: &PgPool, role: UserRole) -> TestUser {
    let name = generate_unique_name();
    let email = generate_unique_email();
    let password = "testpass123".to_string();
    let hashed = hash_password(&password).unwrap();

    #[derive(sqlx::FromRow)]
    struct Row {
        id: Uuid,
    }

    let row = sqlx::query_as::<_, Row>(
        "INSERT INTO users (name, email, password_hash, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(&name)
    .bind(&email)
    .bind(&hashed)
    .bind(role)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id: row.id,
        name,
        email,
        password,
    }
}

#[allow(dead_code)]
pub async fn create_test_post(
    pool: &PgPool,
    author_id: Uuid,
    title: &str,
    is_hidden: bool,
) -> Uuid {
    #[derive(sqlx::FromRow)]
    struct Row {
        id: Uuid,
    }

    let row = sqlx::query_as::<_, Row>(
        "INSERT INTO posts (title, content, is_hidden, author_id)
         VALUES ($1, $2, $3, $4)
         RETURNING id",
    )
    .bind(title)
    .bind("some test content")
    .bind(is_hidden)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .unwrap();

    row.id
}

/// Mints a token with the same config `setup_test_app` uses.
pub fn auth_token(user_id: Uuid) -> String {
    create_token(user_id, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_name() -> String {
    // Name must be 3–30 chars per the spec; keep it unique but within that bound.
    format!("user-{}", &Uuid::new_v4().simple().to_string()[..24])
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
