//! Turns an [`AllocationResult`] into the rows shown to callers.

use serde::{Deserialize, Serialize};

use crate::models::SchoolId;

use super::engine::AllocationResult;

/// One room of a distribution, as displayed by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionRow {
    pub curso_name: String,
    pub salon_name: String,
    pub cantidad_asignada: u64,
}

/// Full outcome of a distribution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionReport {
    pub colegio_id: SchoolId,
    pub cantidad_solicitada: u64,
    pub cantidad_asignada: u64,
    /// Students left without a room because capacity ran out.
    pub residual: u64,
    /// `true` when every requested student was placed.
    pub completa: bool,
    pub asignaciones: Vec<DistributionRow>,
}

/// Build the display report for a distribution.
///
/// Rooms with zero capacity are left out. Rooms that could hold students but
/// received none are kept with `cantidadAsignada = 0`. Row order is the
/// engine's room order and values are copied as-is.
pub fn build_report(result: &AllocationResult<'_>) -> DistributionReport {
    let rows = result
        .units()
        .iter()
        .filter(|unit| unit.capacity() > 0)
        .map(|unit| DistributionRow {
            curso_name: unit.room.course_name.clone(),
            salon_name: unit.room.room_name.clone(),
            cantidad_asignada: unit.assigned,
        })
        .collect();

    DistributionReport {
        colegio_id: result.model().school_id(),
        cantidad_solicitada: result.requested(),
        cantidad_asignada: result.total_assigned(),
        residual: result.residual(),
        completa: result.is_fully_satisfied(),
        asignaciones: rows,
    }
}
