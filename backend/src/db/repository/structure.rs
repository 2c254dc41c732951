//! Read accessor feeding the distribution core.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{CourseRooms, SchoolId};

#[async_trait]
pub trait StructureRepository: Send + Sync {
    /// Fetch every course of a school together with its rooms.
    ///
    /// Returns an empty list when the school is unknown or has no courses;
    /// callers decide whether that is an error. The returned data is an owned
    /// copy and does not change if storage is modified afterwards.
    async fn fetch_school_structure(&self, school_id: SchoolId)
        -> RepositoryResult<Vec<CourseRooms>>;
}
