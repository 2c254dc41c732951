//! Create/read operations for schools, courses and rooms.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Course, CourseId, NewCourse, NewRoom, NewSchool, Room, School, SchoolId};

/// Repository trait for the school catalog.
///
/// Lists are returned in ascending id order. Creating a child entity whose
/// parent does not exist fails with `RepositoryError::NotFound`.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the storage backend is healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Schools ====================

    /// Store a new school. `secret_hash` replaces the clear-text password
    /// carried by `school`, which is ignored.
    async fn create_school(&self, school: &NewSchool, secret_hash: &str)
        -> RepositoryResult<School>;

    /// # Errors
    /// `RepositoryError::NotFound` if the school doesn't exist.
    async fn get_school(&self, school_id: SchoolId) -> RepositoryResult<School>;

    async fn list_schools(&self) -> RepositoryResult<Vec<School>>;

    // ==================== Courses ====================

    /// # Errors
    /// `RepositoryError::NotFound` if `course.school_id` doesn't exist.
    async fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course>;

    async fn get_course(&self, course_id: CourseId) -> RepositoryResult<Course>;

    async fn list_courses(&self) -> RepositoryResult<Vec<Course>>;

    // ==================== Rooms ====================

    /// # Errors
    /// `RepositoryError::NotFound` if `room.course_id` doesn't exist.
    async fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room>;

    async fn list_rooms(&self) -> RepositoryResult<Vec<Room>>;
}
