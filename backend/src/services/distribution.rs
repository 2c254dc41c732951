//! Distribution workflow: snapshot, allocate, report.

use log::{debug, info, warn};

use crate::db::repository::StructureRepository;
use crate::distribution::{
    allocate, build_report, CapacityModel, DistributionError, DistributionReport,
    DistributionResult,
};
use crate::models::SchoolId;

/// Distribute `quantity` students across the rooms of a school.
///
/// The quantity is checked before storage is touched, so an invalid request
/// never reaches the repository.
///
/// # Errors
/// * `InvalidQuantity` if `quantity <= 0`
/// * `SchoolNotFound` if the school is unknown or has no courses
/// * `InvalidCapacity` if a stored room has a negative capacity
/// * `Repository` if the snapshot could not be loaded
pub async fn distribute<R: StructureRepository + ?Sized>(
    repo: &R,
    school_id: SchoolId,
    quantity: i64,
) -> DistributionResult<DistributionReport> {
    if quantity <= 0 {
        warn!(
            "Rejected distribution for school {}: invalid quantity {}",
            school_id, quantity
        );
        return Err(DistributionError::InvalidQuantity { quantity });
    }

    let structure = repo.fetch_school_structure(school_id).await?;
    debug!(
        "School {} snapshot: {} courses, {} rooms",
        school_id,
        structure.len(),
        structure.iter().map(|c| c.rooms.len()).sum::<usize>()
    );

    let model = CapacityModel::build(school_id, structure)?;
    let result = allocate(&model, quantity)?;
    let report = build_report(&result);

    if report.completa {
        info!(
            "Distributed {} students across {} rooms of school {}",
            report.cantidad_asignada,
            report.asignaciones.len(),
            school_id
        );
    } else {
        warn!(
            "Partial distribution for school {}: {} of {} placed, {} left over",
            school_id, report.cantidad_asignada, report.cantidad_solicitada, report.residual
        );
    }

    Ok(report)
}
