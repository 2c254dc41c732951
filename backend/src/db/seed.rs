//! Start-up data loaded from a TOML file.
//!
//! ```toml
//! [[schools]]
//! name = "San Martín"
//! address = "Av. Central 100"
//! phone = "555-0100"
//! password = "secreto"
//!
//! [[schools.courses]]
//! name = "Primero"
//! description = "Primer año"
//! rooms = [
//!     { name = "1-A", amount = 30 },
//!     { name = "1-B", amount = 25 },
//! ]
//! ```
//!
//! Entities are created through [`super::services`], so seed data obeys the
//! same validation as API requests.

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::repository::{CatalogRepository, ErrorContext, RepositoryError, RepositoryResult};
use super::services;
use crate::models::{NewCourse, NewRoom, NewSchool};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub schools: Vec<SeedSchool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSchool {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
    #[serde(default)]
    pub courses: Vec<SeedCourse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCourse {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rooms: Vec<SeedRoom>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedRoom {
    pub name: String,
    pub amount: i64,
}

/// Number of entities created by [`apply_seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub schools: usize,
    pub courses: usize,
    pub rooms: usize,
}

impl SeedData {
    pub fn from_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::ConfigurationError {
                message: format!("Failed to read seed file: {}", e),
                context: ErrorContext::new("load_seed").with_details(path.display().to_string()),
            }
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_operation("load_seed"))
    }

    pub fn from_toml_str(content: &str) -> RepositoryResult<Self> {
        toml::from_str(content)
            .map_err(|e| RepositoryError::configuration(format!("Failed to parse seed data: {}", e)))
    }
}

/// Create every school, course and room in `seed`, in file order.
///
/// Stops at the first failure; entities created before it are kept.
pub async fn apply_seed<R: CatalogRepository + ?Sized>(
    repo: &R,
    seed: &SeedData,
) -> RepositoryResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for school in &seed.schools {
        let stored = services::create_school(
            repo,
            NewSchool {
                name: school.name.clone(),
                address: school.address.clone(),
                phone: school.phone.clone(),
                password: school.password.clone(),
            },
        )
        .await?;
        summary.schools += 1;

        for course in &school.courses {
            let course_row = services::create_course(
                repo,
                NewCourse {
                    name: course.name.clone(),
                    description: course.description.clone(),
                    school_id: stored.id,
                },
            )
            .await?;
            summary.courses += 1;

            for room in &course.rooms {
                services::create_room(
                    repo,
                    NewRoom {
                        name: room.name.clone(),
                        course_id: course_row.id,
                        amount: room.amount,
                    },
                )
                .await?;
                summary.rooms += 1;
            }
        }
    }

    info!(
        "Seeded {} schools, {} courses, {} rooms",
        summary.schools, summary.courses, summary.rooms
    );
    Ok(summary)
}
