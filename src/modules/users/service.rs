use anyhow::anyhow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::{LoginUserDto, TokenResponse, User, UserRole, UserSummary};
use crate::utils::errors::{AppError, codes};
use crate::utils::jwt::create_token;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::policy;

pub struct UserService;

impl UserService {
    /// Primary-key lookup used by the identity middleware and handlers.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }

    /// Creates a user, enforcing name/email uniqueness with name taking
    /// priority when both collide.
    ///
    /// The pre-check provides the priority ordering; the UNIQUE constraints
    /// close the check-then-act window, and an insert-time violation is
    /// translated to the same reason codes the pre-check produces.
    pub async fn create_user(
        db: &PgPool,
        role: UserRole,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        #[derive(sqlx::FromRow)]
        struct Existing {
            name: String,
            email: String,
        }

        let existing = sqlx::query_as::<_, Existing>(
            "SELECT name, email FROM users
             WHERE name = $1 OR email = $2
             ORDER BY (name = $1) DESC
             LIMIT 1",
        )
        .bind(name)
        .bind(email)
        .fetch_optional(db)
        .await?;

        if let Some(existing) = existing {
            if existing.name == name {
                return Err(AppError::bad_request(anyhow!(codes::NAME_ALREADY_USED)));
            }
            if existing.email == email {
                return Err(AppError::bad_request(anyhow!(codes::EMAIL_ALREADY_USED)));
            }
        }

        let password_hash = hash_password(password)?;

        sqlx::query("INSERT INTO users (name, email, password_hash, role) VALUES ($1, $2, $3, $4)")
            .bind(name)
            .bind(email)
            .bind(&password_hash)
            .bind(role)
            .execute(db)
            .await
            .map_err(Self::translate_unique_violation)?;

        Ok(())
    }

    fn translate_unique_violation(err: sqlx::Error) -> AppError {
        if let Some(constraint) = err.as_database_error().and_then(|e| e.constraint()) {
            match constraint {
                "users_name_key" => {
                    return AppError::bad_request(anyhow!(codes::NAME_ALREADY_USED));
                }
                "users_email_key" => {
                    return AppError::bad_request(anyhow!(codes::EMAIL_ALREADY_USED));
                }
                _ => {}
            }
        }

        err.into()
    }

    /// Looks the caller up by email only. Unknown email and wrong password
    /// produce the identical error, so a failed login never reveals which
    /// check rejected it.
    pub async fn login(
        db: &PgPool,
        dto: LoginUserDto,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct Credentials {
            id: Uuid,
            password_hash: String,
        }

        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT id, password_hash FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized(anyhow!(codes::EMAIL_OR_PASSWORD_INCORRECT)))?;

        if !verify_password(&dto.password, &credentials.password_hash)? {
            return Err(AppError::unauthorized(anyhow!(
                codes::EMAIL_OR_PASSWORD_INCORRECT
            )));
        }

        let token = create_token(credentials.id, jwt_config)?;

        Ok(TokenResponse { token })
    }

    /// Role-filtered listing: admins see every account with its id; everyone
    /// else sees name and email only, with admin accounts filtered out.
    pub async fn list_users(db: &PgPool, viewer: &User) -> Result<Vec<UserSummary>, AppError> {
        if policy::is_admin(viewer) {
            #[derive(sqlx::FromRow)]
            struct FullRow {
                id: Uuid,
                name: String,
                email: String,
            }

            let rows =
                sqlx::query_as::<_, FullRow>("SELECT id, name, email FROM users ORDER BY name")
                    .fetch_all(db)
                    .await?;

            return Ok(rows
                .into_iter()
                .map(|row| UserSummary {
                    id: Some(row.id),
                    name: row.name,
                    email: row.email,
                })
                .collect());
        }

        #[derive(sqlx::FromRow)]
        struct PublicRow {
            name: String,
            email: String,
        }

        let rows = sqlx::query_as::<_, PublicRow>(
            "SELECT name, email FROM users WHERE role <> $1 ORDER BY name",
        )
        .bind(UserRole::Admin)
        .fetch_all(db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UserSummary {
                id: None,
                name: row.name,
                email: row.email,
            })
            .collect())
    }
}
