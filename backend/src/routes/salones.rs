use serde::{de, Deserialize, Deserializer, Serialize};

use crate::models::{CourseId, Room, RoomId};

/// Room as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonDto {
    pub id: RoomId,
    pub name: String,
    pub curso_id: CourseId,
    pub amount: i64,
}

impl From<Room> for SalonDto {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            curso_id: room.course_id,
            amount: room.amount,
        }
    }
}

/// Request body for `POST /api/Salones`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalonRequest {
    pub name: String,
    #[serde(default)]
    pub curso_id: Option<CourseId>,
    /// Accepts a JSON integer or a string holding one (HTML forms send text).
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<i64>,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Whole(i64),
        Fraction(f64),
        Text(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Amount::Whole(v)) => Ok(Some(v)),
        Some(Amount::Fraction(v)) => Err(de::Error::custom(format!(
            "amount must be a whole number, got {}",
            v
        ))),
        Some(Amount::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse().map(Some).map_err(|_| {
                de::Error::custom(format!("amount must be a whole number, got \"{}\"", text))
            })
        }
    }
}

pub const SALONES: &str = "/Salones";
