//! Loan management endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{Loan, LoanPayload},
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Every stored loan", body = Vec<Loan>)
    )
)]
pub async fn get_all_loans(State(state): State<AppState>) -> Json<Vec<Loan>> {
    Json(state.services.loans.get_all())
}

/// Get loan by ID
#[utoipa::path(
    get,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = u64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.get(id)?;
    Ok(Json(loan))
}

/// Create a new loan (borrow a book)
///
/// The student and book ids are recorded as given, without lookup.
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanPayload,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_loan(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoanPayload>,
) -> (StatusCode, Json<Loan>) {
    let loan = state.services.loans.add(payload);
    (StatusCode::CREATED, Json(loan))
}

/// Update a loan
#[utoipa::path(
    put,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = u64, Path, description = "Loan ID")),
    request_body = LoanPayload,
    responses(
        (status = 200, description = "Loan updated", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<LoanPayload>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.update(id, payload)?;
    Ok(Json(loan))
}

/// Delete a loan
#[utoipa::path(
    delete,
    path = "/loans/{id}",
    tag = "loans",
    params(("id" = u64, Path, description = "Loan ID")),
    responses(
        (status = 200, description = "Deleted loan", body = Loan),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_loan(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Loan>> {
    let loan = state.services.loans.delete(id)?;
    Ok(Json(loan))
}
