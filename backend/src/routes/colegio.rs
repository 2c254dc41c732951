use serde::{Deserialize, Serialize};

use crate::models::{NewSchool, School, SchoolId};

/// School as returned by the API. The secret is never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColegioDto {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl From<School> for ColegioDto {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            phone: school.phone,
        }
    }
}

/// Request body for `POST /api/Colegio`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColegioRequest {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
}

impl From<CreateColegioRequest> for NewSchool {
    fn from(req: CreateColegioRequest) -> Self {
        NewSchool {
            name: req.name,
            address: req.address,
            phone: req.phone,
            password: req.password,
        }
    }
}

pub const COLEGIOS: &str = "/Colegio";
