//! Validated, immutable view of a school's rooms and their capacities.

use crate::db::repository::{ErrorContext, RepositoryError};
use crate::models::{CourseId, CourseRooms, RoomId, SchoolId};

use super::error::{DistributionError, DistributionResult};

/// A room as seen by the allocation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityRoom {
    pub course_id: CourseId,
    pub course_name: String,
    pub room_id: RoomId,
    pub room_name: String,
    pub capacity: u64,
}

/// Snapshot of one school's rooms, sorted by `(course_id, room_id)`.
///
/// The ordering is the tie-break order for the whole distribution and the
/// display order of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityModel {
    school_id: SchoolId,
    course_count: usize,
    rooms: Vec<CapacityRoom>,
}

impl CapacityModel {
    /// Build a model from the courses (and their rooms) stored for `school_id`.
    ///
    /// # Errors
    /// * `SchoolNotFound` if the id is not a valid key or `courses` is empty
    /// * `InvalidCapacity` if any room has a negative `amount`
    /// * `Repository` (validation) if a course or room does not belong to the
    ///   school it was loaded for
    pub fn build(school_id: SchoolId, courses: Vec<CourseRooms>) -> DistributionResult<Self> {
        if !school_id.is_valid() || courses.is_empty() {
            return Err(DistributionError::SchoolNotFound { school_id });
        }

        let course_count = courses.len();
        let mut rooms = Vec::with_capacity(courses.iter().map(|c| c.rooms.len()).sum());

        for CourseRooms { course, rooms: course_rooms } in courses {
            if course.school_id != school_id {
                return Err(ownership_error(
                    "course",
                    course.id.value(),
                    format!("belongs to school {}, not {}", course.school_id, school_id),
                ));
            }

            for room in course_rooms {
                if room.course_id != course.id {
                    return Err(ownership_error(
                        "room",
                        room.id.value(),
                        format!("belongs to course {}, not {}", room.course_id, course.id),
                    ));
                }
                let capacity =
                    u64::try_from(room.amount).map_err(|_| DistributionError::InvalidCapacity {
                        room_id: room.id,
                        course_id: course.id,
                        amount: room.amount,
                    })?;

                rooms.push(CapacityRoom {
                    course_id: course.id,
                    course_name: course.name.clone(),
                    room_id: room.id,
                    room_name: room.name,
                    capacity,
                });
            }
        }

        rooms.sort_by_key(|r| (r.course_id, r.room_id));

        Ok(Self {
            school_id,
            course_count,
            rooms,
        })
    }

    pub fn school_id(&self) -> SchoolId {
        self.school_id
    }

    pub fn course_count(&self) -> usize {
        self.course_count
    }

    /// Rooms in allocation order.
    pub fn rooms(&self) -> &[CapacityRoom] {
        &self.rooms
    }

    /// Sum of all room capacities. Widened so that no combination of `i64`
    /// capacities can overflow.
    pub fn total_capacity(&self) -> u128 {
        self.rooms.iter().map(|r| u128::from(r.capacity)).sum()
    }
}

fn ownership_error(entity: &str, id: i64, details: String) -> DistributionError {
    RepositoryError::validation_with_context(
        format!("{} {} is not part of the requested school", entity, id),
        ErrorContext::new("build_capacity_model")
            .with_entity(entity)
            .with_entity_id(id)
            .with_details(details),
    )
    .into()
}
