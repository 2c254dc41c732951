//! Data Transfer Objects for the HTTP API.
//!
//! Entity DTOs live next to their routes; this module re-exports them so
//! handlers have a single import point.

use serde::{Deserialize, Serialize};

pub use crate::routes::colegio::{ColegioDto, CreateColegioRequest};
pub use crate::routes::cursos::{CreateCursoRequest, CursoDto};
pub use crate::routes::distribution::{DistributionReport, DistributionRow};
pub use crate::routes::salones::{CreateSalonRequest, SalonDto};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Repository status
    pub database: String,
}
