//! # Colegio Backend
//!
//! Catalog of schools (colegios), their courses (cursos) and rooms (salones),
//! plus a distribution engine that spreads a number of students across a
//! school's rooms in proportion to each room's capacity.
//!
//! ## Architecture
//!
//! - [`models`]: Domain entities and strongly-typed ids
//! - [`distribution`]: Capacity model, allocation engine and report builder
//! - [`db`]: Repository traits, in-memory storage, catalog services, seeding
//! - [`services`]: Distribution workflow on top of the repository
//! - [`routes`]: API request/response types and paths
//! - [`config`]: TOML configuration with environment overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use colegio_backend::db::{services, LocalRepository};
//! use colegio_backend::models::{NewCourse, NewRoom, NewSchool};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = LocalRepository::new();
//! let school = services::create_school(&repo, NewSchool {
//!     name: "San Martín".into(),
//!     address: String::new(),
//!     phone: String::new(),
//!     password: "secreto".into(),
//! }).await?;
//! let course = services::create_course(&repo, NewCourse {
//!     name: "Primero".into(),
//!     description: String::new(),
//!     school_id: school.id,
//! }).await?;
//! services::create_room(&repo, NewRoom { name: "A".into(), course_id: course.id, amount: 10 }).await?;
//!
//! let report = colegio_backend::services::distribute(&repo, school.id, 8).await?;
//! assert_eq!(report.residual, 0);
//! # Ok(())
//! # }
//! ```

// RepositoryError carries rich context for debugging
#![allow(clippy::result_large_err)]

pub mod config;
pub mod db;
pub mod distribution;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
