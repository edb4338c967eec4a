//! Admin role gate.
//!
//! Composes on top of [`AuthSession`]: identity must already be resolved
//! before the role is examined. The decision itself is pure.

use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthSession;
use crate::modules::users::model::{User, UserRole};
use crate::state::AppState;
use crate::utils::errors::{AppError, codes};

/// Permits continuation only for admin callers; no side effects, no I/O.
pub fn ensure_admin(user: &User) -> Result<(), AppError> {
    if user.role == UserRole::Admin {
        Ok(())
    } else {
        Err(AppError::forbidden(anyhow!(codes::AUTH_FORBIDDEN)))
    }
}

/// Extractor for admin-only routes.
///
/// ```rust,ignore
/// pub async fn create_user(
///     RequireAdmin(session): RequireAdmin,
///     State(state): State<AppState>,
/// ) -> Result<StatusCode, AppError> {
///     // Only admins get here.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = AuthSession::from_request_parts(parts, state).await?;
        ensure_admin(&session.user)?;

        Ok(RequireAdmin(session))
    }
}
