//! Enrollment handler: attach a student to a class.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use swimroster_core::assignment::assignment_error_to_status_code;

use crate::{
    handlers::error_response,
    models::{AddStudent, StudentDto},
    state::AppState,
};

/// Add a student to a class (POST /api/classes/{id}/students).
///
/// Delegates to the assignment service, which owns the
/// one-class-per-student rule.
pub async fn add_student(
    State(state): State<AppState>,
    Path(class_id): Path<Uuid>,
    json_result: Result<Json<AddStudent>, JsonRejection>,
) -> Result<Json<StudentDto>, (StatusCode, String)> {
    let Json(payload) = json_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse request body: {e}"),
        )
    })?;

    let student_id = payload
        .student_id
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "studentId required"))?;

    let student = state
        .assignments
        .assign(class_id, student_id)
        .await
        .map_err(|e| {
            let code = assignment_error_to_status_code(&e);
            let status =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            error_response(status, e.to_string())
        })?;

    tracing::info!(%class_id, %student_id, "Enrolled student in class");

    Ok(Json(StudentDto::from_student(&student)))
}
