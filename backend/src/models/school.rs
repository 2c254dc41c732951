//! Persistent entities: schools own courses, courses own rooms.
//!
//! These are the repository-level shapes. HTTP payloads live in
//! [`crate::routes`] and are converted at the boundary.

use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(SchoolId);
define_id_type!(CourseId);
define_id_type!(RoomId);

/// A school ("colegio").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// SHA-256 hex digest of the school's secret. Never leaves the backend.
    pub secret_hash: String,
}

/// A course ("curso") belonging to exactly one school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub school_id: SchoolId,
}

/// A room ("salón") belonging to exactly one course.
///
/// `amount` is the room's capacity. It is signed so that corrupt rows can be
/// detected and reported instead of wrapping silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub course_id: CourseId,
    pub amount: i64,
}

/// Input for creating a school. The secret is in clear text here and is
/// hashed by the service layer before it reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub school_id: SchoolId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub course_id: CourseId,
    pub amount: i64,
}

/// One course of a school together with its rooms, as read from storage.
///
/// This is the unit the distribution core consumes; see
/// [`crate::distribution::CapacityModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRooms {
    pub course: Course,
    pub rooms: Vec<Room>,
}
