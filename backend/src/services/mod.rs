//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repositories. Catalog
//! operations (schools, courses, rooms) live in [`crate::db::services`];
//! this module holds the workflows built on top of them.

pub mod distribution;

pub use distribution::distribute;
