//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookQuery, CreateBook, UpdateBook},
        borrowed_book::{BorrowRequest, BorrowedBook},
    },
    AppState,
};

use super::Payload;

/// Borrow response
#[derive(Serialize, ToSchema)]
pub struct BorrowResponse {
    /// Status message
    pub message: String,
    /// The new borrow record
    pub borrowed_book: BorrowedBook,
}

/// List books
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Payload(data): Payload<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.create_book(&data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{id}/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(data): Payload<CreateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.replace_book(id, data).await?;
    Ok(Json(book))
}

/// Partially update a book
#[utoipa::path(
    patch,
    path = "/books/{id}/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(data): Payload<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.update_book(id, &data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/books/{id}/borrow/",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = BorrowResponse),
        (status = 400, description = "Book already borrowed or borrower_id missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(request): Payload<BorrowRequest>,
) -> AppResult<Json<BorrowResponse>> {
    let borrower_id = request.borrower_id()?;
    let borrowed_book = state.services.loans.borrow_book(id, borrower_id).await?;

    Ok(Json(BorrowResponse {
        message: "Book borrowed successfully.".to_string(),
        borrowed_book,
    }))
}
