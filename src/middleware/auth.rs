use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::{AppError, codes};
use crate::utils::jwt::verify_token;

/// Extractor that resolves the bearer token to an authenticated identity.
///
/// Carries the raw token together with the user row it decoded to. Built once
/// per request and dropped with it. Costs exactly one primary-key lookup;
/// header and signature failures reject before any database access.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Pulls the token out of an `Authorization` header value.
///
/// The scheme comparison is case-insensitive; each malformed shape gets its
/// own reason code so clients can tell a missing header from a wrong scheme
/// from an empty token.
fn bearer_token(header_value: Option<&str>) -> Result<&str, AppError> {
    let value = header_value.ok_or_else(|| AppError::unauthorized(anyhow!(codes::AUTH_MISSING)))?;

    let (scheme, token) = value.split_once(' ').unwrap_or((value, ""));
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::unauthorized(anyhow!(codes::AUTH_WRONG_TYPE)));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::unauthorized(anyhow!(codes::AUTH_TOKEN_MISSING)));
    }

    Ok(token)
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let token = bearer_token(header_value)?;
        let claims = verify_token(token, &state.jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::unauthorized(anyhow!(codes::AUTH_TOKEN_INVALID)))?;

        // The token may outlive its user; a stale id gets the same code as a
        // bad signature.
        let user = UserService::find_by_id(&state.db, user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow!(codes::AUTH_TOKEN_INVALID)))?;

        Ok(AuthSession {
            token: token.to_string(),
            user,
        })
    }
}
