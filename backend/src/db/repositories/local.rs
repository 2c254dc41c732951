//! In-memory local repository implementation.
//!
//! All data lives in `BTreeMap`s behind a single lock, which keeps listings in
//! id order and makes execution deterministic. Suitable for unit tests, local
//! development and small deployments that can afford to lose state on restart.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{
    Course, CourseId, CourseRooms, NewCourse, NewRoom, NewSchool, Room, RoomId, School, SchoolId,
};

/// In-memory local repository.
///
/// Cloning is cheap and every clone shares the same data.
///
/// # Example
/// ```
/// use colegio_backend::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.school_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    schools: BTreeMap<SchoolId, School>,
    courses: BTreeMap<CourseId, Course>,
    rooms: BTreeMap<RoomId, Room>,

    // ID counters
    next_school_id: i64,
    next_course_id: i64,
    next_room_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            schools: BTreeMap::new(),
            courses: BTreeMap::new(),
            rooms: BTreeMap::new(),
            next_school_id: 1,
            next_course_id: 1,
            next_room_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository and reset the id counters.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    pub fn school_count(&self) -> usize {
        self.data.read().schools.len()
    }

    pub fn course_count(&self) -> usize {
        self.data.read().courses.len()
    }

    pub fn room_count(&self) -> usize {
        self.data.read().rooms.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        if !self.data.read().is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn create_school(
        &self,
        school: &NewSchool,
        secret_hash: &str,
    ) -> RepositoryResult<School> {
        self.check_health()?;
        let mut data = self.data.write();
        let id = SchoolId::new(data.next_school_id);
        data.next_school_id += 1;

        let stored = School {
            id,
            name: school.name.clone(),
            address: school.address.clone(),
            phone: school.phone.clone(),
            secret_hash: secret_hash.to_string(),
        };
        data.schools.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_school(&self, school_id: SchoolId) -> RepositoryResult<School> {
        self.check_health()?;
        self.data
            .read()
            .schools
            .get(&school_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("School {} not found", school_id),
                    ErrorContext::new("get_school")
                        .with_entity("school")
                        .with_entity_id(school_id),
                )
            })
    }

    async fn list_schools(&self) -> RepositoryResult<Vec<School>> {
        self.check_health()?;
        Ok(self.data.read().schools.values().cloned().collect())
    }

    async fn create_course(&self, course: &NewCourse) -> RepositoryResult<Course> {
        self.check_health()?;
        let mut data = self.data.write();
        if !data.schools.contains_key(&course.school_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("School {} not found", course.school_id),
                ErrorContext::new("create_course")
                    .with_entity("school")
                    .with_entity_id(course.school_id),
            ));
        }

        let id = CourseId::new(data.next_course_id);
        data.next_course_id += 1;

        let stored = Course {
            id,
            name: course.name.clone(),
            description: course.description.clone(),
            school_id: course.school_id,
        };
        data.courses.insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_course(&self, course_id: CourseId) -> RepositoryResult<Course> {
        self.check_health()?;
        self.data
            .read()
            .courses
            .get(&course_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Course {} not found", course_id),
                    ErrorContext::new("get_course")
                        .with_entity("course")
                        .with_entity_id(course_id),
                )
            })
    }

    async fn list_courses(&self) -> RepositoryResult<Vec<Course>> {
        self.check_health()?;
        Ok(self.data.read().courses.values().cloned().collect())
    }

    async fn create_room(&self, room: &NewRoom) -> RepositoryResult<Room> {
        self.check_health()?;
        let mut data = self.data.write();
        if !data.courses.contains_key(&room.course_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Course {} not found", room.course_id),
                ErrorContext::new("create_room")
                    .with_entity("course")
                    .with_entity_id(room.course_id),
            ));
        }

        let id = RoomId::new(data.next_room_id);
        data.next_room_id += 1;

        let stored = Room {
            id,
            name: room.name.clone(),
            course_id: room.course_id,
            amount: room.amount,
        };
        data.rooms.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_rooms(&self) -> RepositoryResult<Vec<Room>> {
        self.check_health()?;
        Ok(self.data.read().rooms.values().cloned().collect())
    }
}

#[async_trait]
impl StructureRepository for LocalRepository {
    async fn fetch_school_structure(
        &self,
        school_id: SchoolId,
    ) -> RepositoryResult<Vec<CourseRooms>> {
        self.check_health()?;
        let data = self.data.read();

        let structure = data
            .courses
            .values()
            .filter(|course| course.school_id == school_id)
            .map(|course| CourseRooms {
                course: course.clone(),
                rooms: data
                    .rooms
                    .values()
                    .filter(|room| room.course_id == course.id)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(structure)
    }
}
