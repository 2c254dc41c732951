//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ColegioDto, CreateColegioRequest, CreateCursoRequest, CreateSalonRequest, CursoDto,
    DistributionReport, DistributionRow, HealthResponse, SalonDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::{CourseId, NewCourse, NewRoom, SchoolId};
use crate::routes::distribution::RESIDUAL_HEADER;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Result type for handlers that create a resource.
pub type CreatedResult<T> = Result<(StatusCode, Json<T>), AppError>;

/// JSON request body whose decode failure is answered by [`AppError`].
pub type JsonBody<T> = Result<Json<T>, JsonRejection>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Colegio
// =============================================================================

/// GET /api/Colegio
pub async fn list_colegios(State(state): State<AppState>) -> HandlerResult<Vec<ColegioDto>> {
    let schools = db_services::list_schools(state.repository.as_ref()).await?;
    Ok(Json(schools.into_iter().map(Into::into).collect()))
}

/// POST /api/Colegio
pub async fn create_colegio(
    State(state): State<AppState>,
    body: JsonBody<CreateColegioRequest>,
) -> CreatedResult<ColegioDto> {
    let Json(request) = body?;
    let school = db_services::create_school(state.repository.as_ref(), request.into()).await?;
    Ok((StatusCode::CREATED, Json(school.into())))
}

// =============================================================================
// Cursos
// =============================================================================

/// GET /api/Cursos
pub async fn list_cursos(State(state): State<AppState>) -> HandlerResult<Vec<CursoDto>> {
    let courses = db_services::list_courses(state.repository.as_ref()).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

/// POST /api/Cursos
///
/// A missing `colegioId` is passed on as id 0 so the service layer answers
/// with its "must be selected" validation message.
pub async fn create_curso(
    State(state): State<AppState>,
    body: JsonBody<CreateCursoRequest>,
) -> CreatedResult<CursoDto> {
    let Json(request) = body?;
    let course = NewCourse {
        name: request.name,
        description: request.description,
        school_id: request.colegio_id.unwrap_or(SchoolId::new(0)),
    };
    let stored = db_services::create_course(state.repository.as_ref(), course).await?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

// =============================================================================
// Salones
// =============================================================================

/// GET /api/Salones
pub async fn list_salones(State(state): State<AppState>) -> HandlerResult<Vec<SalonDto>> {
    let rooms = db_services::list_rooms(state.repository.as_ref()).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// POST /api/Salones
pub async fn create_salon(
    State(state): State<AppState>,
    body: JsonBody<CreateSalonRequest>,
) -> CreatedResult<SalonDto> {
    let Json(request) = body?;
    let amount = request
        .amount
        .ok_or_else(|| AppError::BadRequest("Amount is required".to_string()))?;
    let room = NewRoom {
        name: request.name,
        course_id: request.curso_id.unwrap_or(CourseId::new(0)),
        amount,
    };
    let stored = db_services::create_room(state.repository.as_ref(), room).await?;
    Ok((StatusCode::CREATED, Json(stored.into())))
}

// =============================================================================
// Distribucion
// =============================================================================

/// GET /api/Distribucion/{colegio_id}/distribuir/{cantidad}
///
/// Returns the rows in display order; the residual travels in the
/// `x-distribution-residual` header.
pub async fn distribute(
    State(state): State<AppState>,
    Path(raw): Path<(String, String)>,
) -> Result<([(&'static str, String); 1], Json<Vec<DistributionRow>>), AppError> {
    let (school_id, quantity) = parse_distribution_path(&raw)?;
    let report = services::distribute(state.repository.as_ref(), school_id, quantity).await?;
    Ok((
        [(RESIDUAL_HEADER, report.residual.to_string())],
        Json(report.asignaciones),
    ))
}

/// GET /api/Distribucion/{colegio_id}/resumen/{cantidad}
pub async fn distribution_summary(
    State(state): State<AppState>,
    Path(raw): Path<(String, String)>,
) -> HandlerResult<DistributionReport> {
    let (school_id, quantity) = parse_distribution_path(&raw)?;
    let report = services::distribute(state.repository.as_ref(), school_id, quantity).await?;
    Ok(Json(report))
}

/// Parse `{colegio_id}/{cantidad}` path segments.
///
/// Segments are taken as text so that values such as `2.5` or `diez` are
/// reported with the usual JSON error body.
fn parse_distribution_path(
    (colegio_id, cantidad): &(String, String),
) -> Result<(SchoolId, i64), AppError> {
    let school_id = colegio_id.trim().parse::<i64>().map_err(|_| {
        AppError::BadRequest(format!("Invalid school id '{}': expected an integer", colegio_id))
    })?;
    let quantity = cantidad.trim().parse::<i64>().map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid quantity '{}': the number of students must be a whole number greater than zero",
            cantidad
        ))
    })?;
    Ok((SchoolId::new(school_id), quantity))
}
