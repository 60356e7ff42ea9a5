//! Student API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::student::{Student, StudentPayload},
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all students
#[utoipa::path(
    get,
    path = "/students",
    tag = "students",
    responses(
        (status = 200, description = "Every stored student", body = Vec<Student>)
    )
)]
pub async fn get_all_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.services.students.get_all())
}

/// Get student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.get(id)?;
    Ok(Json(student))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/students",
    tag = "students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> (StatusCode, Json<Student>) {
    let student = state.services.students.add(payload);
    (StatusCode::CREATED, Json(student))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student ID")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.update(id, payload)?;
    Ok(Json(student))
}

/// Delete a student
///
/// Loans that reference the student are left in place.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "students",
    params(("id" = u64, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Deleted student", body = Student),
        (status = 404, description = "Student not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Student>> {
    let student = state.services.students.delete(id)?;
    Ok(Json(student))
}
