//! Class CRUD handlers.
//!
//! These handlers use repository trait objects for database access and keep
//! to pure translation: request in, repository call, payload out.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use swimroster_core::storage::RepositoryError;

use crate::{
    handlers::{error_response, AppError},
    models::{ClassDetail, ClassSummary, CreateClass},
    state::AppState,
};

/// Query parameters for listing classes.
#[derive(Debug, Deserialize)]
pub struct ListClassesQuery {
    /// Session to list classes for (required).
    pub session: String,
}

/// List classes in a session (GET /api/classes?session=S).
pub async fn list_classes(
    State(state): State<AppState>,
    query_result: Result<Query<ListClassesQuery>, QueryRejection>,
) -> Result<Json<Vec<ClassSummary>>, (StatusCode, String)> {
    let Query(query) = query_result.map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            "Missing required query parameter: session",
        )
    })?;

    let classes = state
        .class_repo
        .get_classes_by_session(&query.session)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let mut summaries = Vec::with_capacity(classes.len());
    for class in &classes {
        let count = state
            .student_repo
            .count_students_in_class(class.id)
            .await
            .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
        summaries.push(ClassSummary::from_class(class, count));
    }

    Ok(Json(summaries))
}

/// Get a single class with its roster (GET /api/classes/{id}).
pub async fn get_class(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassDetail>, AppError> {
    let class = state.class_repo.get_class(id).await?;

    let class = match class {
        Some(c) => c,
        None => {
            return Err(RepositoryError::NotFound {
                entity_type: "SwimClass",
                id: id.to_string(),
            }
            .into())
        }
    };

    let roster = state.student_repo.get_students_by_class(id).await?;

    Ok(Json(ClassDetail::from_class(&class, &roster)))
}

/// Create a new class (POST /api/classes).
pub async fn create_class(
    State(state): State<AppState>,
    json_result: Result<Json<CreateClass>, JsonRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Json(payload) = json_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse request body: {e}"),
        )
    })?;

    payload
        .validate()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    let class = payload.into_class();

    state
        .class_repo
        .save_class(&class)
        .await
        .map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(class_id = %class.id, session = %class.session, "Created new class");

    let location = format!("/api/classes/{}", class.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ClassSummary::from_class(&class, 0)),
    ))
}
