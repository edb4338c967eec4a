//! Middleware for request processing.
//!
//! - [`auth`]: bearer-token identity resolution
//! - [`role`]: admin role gate
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. The [`auth::AuthSession`] extractor parses the header, verifies the
//!    JWT, and resolves the decoded id to a user row
//! 3. Admin-only routes layer [`role::RequireAdmin`] on top
//! 4. The handler runs with the resolved identity as a plain argument
//!
//! Handlers for protected routes take `AuthSession` (never an `Option`), so
//! "identity resolved before use" holds by construction.

pub mod auth;
pub mod role;
