//! Error types for the distribution core.

use crate::db::repository::RepositoryError;
use crate::models::{CourseId, RoomId, SchoolId};

/// Result type for distribution operations.
pub type DistributionResult<T> = Result<T, DistributionError>;

/// Reasons a distribution request can be refused.
///
/// Partial fulfillment is not an error; it is reported through
/// [`AllocationResult::residual`](super::AllocationResult::residual).
#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    /// Requested quantity was zero or negative.
    #[error("Invalid quantity {quantity}: the number of students must be greater than zero")]
    InvalidQuantity { quantity: i64 },

    /// A stored room carries a negative capacity.
    #[error("Invalid capacity {amount} for room {room_id} of course {course_id}")]
    InvalidCapacity {
        room_id: RoomId,
        course_id: CourseId,
        amount: i64,
    },

    /// No courses could be resolved for the school.
    #[error("School {school_id} not found or has no courses")]
    SchoolNotFound { school_id: SchoolId },

    /// Storage failed while loading the snapshot.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DistributionError {
    /// Stable machine-readable code used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidQuantity { .. } => "INVALID_QUANTITY",
            Self::InvalidCapacity { .. } => "INVALID_CAPACITY",
            Self::SchoolNotFound { .. } => "SCHOOL_NOT_FOUND",
            Self::Repository(_) => "REPOSITORY_ERROR",
        }
    }
}
