//! Student distribution core.
//!
//! Splits a requested number of students across the rooms of one school:
//!
//! ```text
//! Vec<CourseRooms> ──► CapacityModel::build ──► allocate(model, Q) ──► build_report
//!   (repository)        validated snapshot      AllocationResult       rows + residual
//! ```
//!
//! Everything here is synchronous and free of I/O. Loading the snapshot and
//! returning the report over HTTP is done by [`crate::services::distribution`].

pub mod capacity;
pub mod engine;
pub mod error;
pub mod report;

pub use capacity::{CapacityModel, CapacityRoom};
pub use engine::{allocate, AllocationResult, AllocationUnit};
pub use error::{DistributionError, DistributionResult};
pub use report::{build_report, DistributionReport, DistributionRow};
