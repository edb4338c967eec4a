use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

/// Fixed reason codes returned to clients.
///
/// `Unauthorized`/`Forbidden`/`NotFound` responses carry one of these rather
/// than a free-form message, so a failed request never reveals which internal
/// check rejected it beyond the code itself.
pub mod codes {
    pub const AUTH_MISSING: &str = "AUTH_MISSING";
    pub const AUTH_WRONG_TYPE: &str = "AUTH_WRONG_TYPE";
    pub const AUTH_TOKEN_MISSING: &str = "AUTH_TOKEN_MISSING";
    pub const AUTH_TOKEN_INVALID: &str = "AUTH_TOKEN_INVALID";
    pub const AUTH_FORBIDDEN: &str = "AUTH_FORBIDDEN";
    pub const EMAIL_OR_PASSWORD_INCORRECT: &str = "EMAIL_OR_PASSWORD_INCORRECT";
    pub const NAME_ALREADY_USED: &str = "NAME_ALREADY_USED";
    pub const EMAIL_ALREADY_USED: &str = "EMAIL_ALREADY_USED";
    pub const POST_NOT_FOUND: &str = "POST_NOT_FOUND";
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 5xx bodies stay generic; the chain goes to the log instead.
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = ?self.error, "request failed");
            let body = Json(json!({ "error": "Internal server error" }));
            return (self.status, body).into_response();
        }

        let body = Json(json!({ "error": self.error.to_string() }));
        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Error body shape, for OpenAPI docs.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
