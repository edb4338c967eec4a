//! Access policy decisions shared by the users and posts modules.
//!
//! The role comparison lives here and only here; handlers and services ask
//! these functions instead of re-deriving `role == Admin` at each call site.
//!
//! Two recurring decisions:
//!
//! - **Visibility**: hidden posts are readable only by their author or an
//!   admin. Reads that fail this check are answered as "not found" by the
//!   caller, so hidden content is indistinguishable from absent content.
//! - **Mutation**: updates and deletes are permitted only to the owner or an
//!   admin, and rejected with `403` otherwise.

use anyhow::anyhow;
use uuid::Uuid;

use crate::modules::users::model::{User, UserRole};
use crate::utils::errors::{AppError, codes};

pub fn is_admin(user: &User) -> bool {
    user.role == UserRole::Admin
}

/// Whether `viewer` may see hidden posts owned by `owner_id`.
pub fn can_view_hidden(viewer: &User, owner_id: Uuid) -> bool {
    is_admin(viewer) || viewer.id == owner_id
}

/// Authorizes an update or delete of a post owned by `owner_id`.
pub fn authorize_mutation(viewer: &User, owner_id: Uuid) -> Result<(), AppError> {
    if is_admin(viewer) || viewer.id == owner_id {
        Ok(())
    } else {
        Err(AppError::forbidden(anyhow!(codes::AUTH_FORBIDDEN)))
    }
}
