//! Book API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload},
    AppState,
};

use super::{ApiJson, ApiPath};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book", body = Vec<Book>)
    )
)]
pub async fn get_all_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.get_all())
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(id)?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookPayload>,
) -> (StatusCode, Json<Book>) {
    let book = state.services.books.add(payload);
    (StatusCode::CREATED, Json(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<BookPayload>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, payload)?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = u64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Deleted book", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.delete(id)?;
    Ok(Json(book))
}
