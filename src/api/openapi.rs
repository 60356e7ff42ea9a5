//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Records API",
        version = "1.0.0",
        description = "Book, student and loan records REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::get_all_books,
        books::get_book,
        books::add_book,
        books::update_book,
        books::delete_book,
        // Students
        students::get_all_students,
        students::get_student,
        students::add_student,
        students::update_student,
        students::delete_student,
        // Loans
        loans::get_all_loans,
        loans::get_loan,
        loans::add_loan,
        loans::update_loan,
        loans::delete_loan,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::student::Student,
            crate::models::student::StudentPayload,
            crate::models::loan::Loan,
            crate::models::loan::LoanPayload,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book records"),
        (name = "students", description = "Student records"),
        (name = "loans", description = "Loan records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_record_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/books", "/books/{id}", "/students", "/students/{id}", "/loans", "/loans/{id}"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {}", expected);
        }
    }
}
