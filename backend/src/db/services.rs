//! High-level database service layer.
//!
//! Repository-agnostic operations that add the business rules every storage
//! backend must share: input normalization, required fields, secret hashing
//! and capacity checks. HTTP handlers and the seed loader go through these
//! functions rather than calling repositories directly.
//!
//! # Usage
//!
//! ```no_run
//! use colegio_backend::db::{services, repositories::LocalRepository};
//! use colegio_backend::models::NewSchool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let school = services::create_school(&repo, NewSchool {
//!         name: "San Martín".into(),
//!         address: "Av. Central 100".into(),
//!         phone: "555-0100".into(),
//!         password: "secreto".into(),
//!     })
//!     .await?;
//!     println!("created school {}", school.id);
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{CatalogRepository, ErrorContext, RepositoryError, RepositoryResult};
use super::secret::{hash_secret, MIN_SECRET_LEN};
use crate::models::{Course, NewCourse, NewRoom, NewSchool, Room, School};

// ==================== Health & Connection ====================

/// Check if the storage backend is healthy.
pub async fn health_check<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Schools ====================

/// Create a school after trimming its fields and validating them.
///
/// # Errors
/// * `ValidationError` if the name is blank or the secret is shorter than
///   [`MIN_SECRET_LEN`] characters
pub async fn create_school<R: CatalogRepository + ?Sized>(
    repo: &R,
    school: NewSchool,
) -> RepositoryResult<School> {
    let school = NewSchool {
        name: school.name.trim().to_string(),
        address: school.address.trim().to_string(),
        phone: school.phone.trim().to_string(),
        password: school.password,
    };

    require_name(&school.name, "create_school", "school")?;
    if school.password.chars().count() < MIN_SECRET_LEN {
        warn!("Rejected school '{}': secret too short", school.name);
        return Err(RepositoryError::validation_with_context(
            format!("Password must be at least {} characters", MIN_SECRET_LEN),
            ErrorContext::new("create_school").with_entity("school"),
        ));
    }

    let stored = repo
        .create_school(&school, &hash_secret(&school.password))
        .await?;
    info!("Created school {} ('{}')", stored.id, stored.name);
    Ok(stored)
}

pub async fn list_schools<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<School>> {
    repo.list_schools().await
}

// ==================== Courses ====================

/// Create a course under an existing school.
///
/// # Errors
/// * `ValidationError` if the name is blank or the school id is not a valid key
/// * `NotFound` if the school doesn't exist
pub async fn create_course<R: CatalogRepository + ?Sized>(
    repo: &R,
    course: NewCourse,
) -> RepositoryResult<Course> {
    let course = NewCourse {
        name: course.name.trim().to_string(),
        description: course.description.trim().to_string(),
        school_id: course.school_id,
    };

    require_name(&course.name, "create_course", "course")?;
    if !course.school_id.is_valid() {
        return Err(RepositoryError::validation_with_context(
            "A school must be selected",
            ErrorContext::new("create_course")
                .with_entity("school")
                .with_entity_id(course.school_id),
        ));
    }

    let stored = repo.create_course(&course).await?;
    info!(
        "Created course {} ('{}') for school {}",
        stored.id, stored.name, stored.school_id
    );
    Ok(stored)
}

pub async fn list_courses<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Course>> {
    repo.list_courses().await
}

// ==================== Rooms ====================

/// Create a room under an existing course.
///
/// # Errors
/// * `ValidationError` if the name is blank, the course id is not a valid key
///   or `amount` is negative
/// * `NotFound` if the course doesn't exist
pub async fn create_room<R: CatalogRepository + ?Sized>(
    repo: &R,
    room: NewRoom,
) -> RepositoryResult<Room> {
    let room = NewRoom {
        name: room.name.trim().to_string(),
        course_id: room.course_id,
        amount: room.amount,
    };

    require_name(&room.name, "create_room", "room")?;
    if !room.course_id.is_valid() {
        return Err(RepositoryError::validation_with_context(
            "A course must be selected",
            ErrorContext::new("create_room")
                .with_entity("course")
                .with_entity_id(room.course_id),
        ));
    }
    if room.amount < 0 {
        warn!("Rejected room '{}': negative capacity {}", room.name, room.amount);
        return Err(RepositoryError::validation_with_context(
            format!("Room capacity must be zero or greater, got {}", room.amount),
            ErrorContext::new("create_room").with_entity("room"),
        ));
    }

    let stored = repo.create_room(&room).await?;
    info!(
        "Created room {} ('{}', capacity {}) for course {}",
        stored.id, stored.name, stored.amount, stored.course_id
    );
    Ok(stored)
}

pub async fn list_rooms<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Room>> {
    repo.list_rooms().await
}

fn require_name(name: &str, operation: &str, entity: &str) -> RepositoryResult<()> {
    if name.is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Name is required",
            ErrorContext::new(operation).with_entity(entity),
        ));
    }
    Ok(())
}
