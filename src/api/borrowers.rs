//! Borrower endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        borrowed_book::BorrowedBook,
        borrower::{Borrower, CreateBorrower, UpdateBorrower},
    },
    AppState,
};

use super::Payload;

/// List borrowers
#[utoipa::path(
    get,
    path = "/borrowers/",
    tag = "borrowers",
    responses(
        (status = 200, description = "List of borrowers", body = Vec<Borrower>)
    )
)]
pub async fn list_borrowers(State(state): State<AppState>) -> AppResult<Json<Vec<Borrower>>> {
    let borrowers = state.services.borrowers.list().await?;
    Ok(Json(borrowers))
}

/// Register a borrower
#[utoipa::path(
    post,
    path = "/borrowers/",
    tag = "borrowers",
    request_body = CreateBorrower,
    responses(
        (status = 201, description = "Borrower created", body = Borrower),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrower(
    State(state): State<AppState>,
    Payload(data): Payload<CreateBorrower>,
) -> AppResult<(StatusCode, Json<Borrower>)> {
    let borrower = state.services.borrowers.create(&data).await?;
    Ok((StatusCode::CREATED, Json(borrower)))
}

/// Get borrower by ID
#[utoipa::path(
    get,
    path = "/borrowers/{id}/",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrower details", body = Borrower),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_borrower(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.get_by_id(id).await?;
    Ok(Json(borrower))
}

/// Replace a borrower
#[utoipa::path(
    put,
    path = "/borrowers/{id}/",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    request_body = CreateBorrower,
    responses(
        (status = 200, description = "Borrower updated", body = Borrower),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_borrower(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(data): Payload<CreateBorrower>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.replace(id, data).await?;
    Ok(Json(borrower))
}

/// Partially update a borrower
#[utoipa::path(
    patch,
    path = "/borrowers/{id}/",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    request_body = UpdateBorrower,
    responses(
        (status = 200, description = "Borrower updated", body = Borrower),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_borrower(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(data): Payload<UpdateBorrower>,
) -> AppResult<Json<Borrower>> {
    let borrower = state.services.borrowers.update(id, &data).await?;
    Ok(Json(borrower))
}

/// Delete a borrower
#[utoipa::path(
    delete,
    path = "/borrowers/{id}/",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    responses(
        (status = 204, description = "Borrower deleted"),
        (status = 400, description = "Borrower has borrowed books", body = crate::error::ErrorResponse),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_borrower(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.borrowers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Books borrowed by a borrower
#[utoipa::path(
    get,
    path = "/borrowers/{id}/borrowed_books/",
    tag = "borrowers",
    params(("id" = i64, Path, description = "Borrower ID")),
    responses(
        (status = 200, description = "Borrow records of the borrower", body = Vec<BorrowedBook>),
        (status = 404, description = "Borrower not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrowed_books(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<BorrowedBook>>> {
    let records = state.services.loans.get_borrower_books(id).await?;
    Ok(Json(records))
}
