//! Posts module.
//!
//! Post CRUD scoped to the authenticated caller, with hidden-post visibility
//! rules applied through [`crate::utils::policy`].

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
