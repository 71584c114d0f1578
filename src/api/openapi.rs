//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, borrowers, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library catalog and borrowing REST API"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::get_book,
        books::replace_book,
        books::update_book,
        books::delete_book,
        books::borrow_book,
        // Borrowers
        borrowers::list_borrowers,
        borrowers::create_borrower,
        borrowers::get_borrower,
        borrowers::replace_borrower,
        borrowers::update_borrower,
        borrowers::delete_borrower,
        borrowers::borrowed_books,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::borrower::Borrower,
            crate::models::borrower::CreateBorrower,
            crate::models::borrower::UpdateBorrower,
            crate::models::borrowed_book::BorrowedBook,
            crate::models::borrowed_book::BorrowRequest,
            books::BorrowResponse,
            health::LivenessResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog and borrowing"),
        (name = "borrowers", description = "Borrower management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
