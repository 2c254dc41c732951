use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseId, SchoolId};

/// Course as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoDto {
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub colegio_id: SchoolId,
}

impl From<Course> for CursoDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            colegio_id: course.school_id,
        }
    }
}

/// Request body for `POST /api/Cursos`.
///
/// `colegioId` is optional at the JSON level so that a missing selection is
/// answered with a readable validation message instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCursoRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub colegio_id: Option<SchoolId>,
}

pub const CURSOS: &str = "/Cursos";
