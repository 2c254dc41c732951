//! Request/response types for each API resource, plus the paths they are
//! mounted under (relative to `/api`).

pub mod colegio;
pub mod cursos;
pub mod distribution;
pub mod salones;
