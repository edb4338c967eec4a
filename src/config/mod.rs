//! Configuration modules for the Inkpost API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables once at startup and carried in
//! [`crate::state::AppState`] from then on.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: JWT signing secret and token lifetime

pub mod cors;
pub mod database;
pub mod jwt;
