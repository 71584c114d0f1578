//! Liveness and readiness endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

#[derive(Serialize, ToSchema)]
pub struct LivenessResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    pub version: String,
}

/// Catalog totals returned once the database answers
#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub books: i64,
    pub books_available: i64,
    pub books_borrowed: i64,
    pub borrowers: i64,
}

/// Liveness check, never touches the database
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = LivenessResponse)
    )
)]
pub async fn health_check() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check: queries the catalog and reports its size
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = ReadinessResponse),
        (status = 500, description = "Database unreachable", body = crate::error::ErrorResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> AppResult<Json<ReadinessResponse>> {
    let stats = state.services.repository.stats().await?;
    tracing::debug!(books = stats.books, borrowers = stats.borrowers, "Readiness check");

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: stats.books,
        books_available: stats.books - stats.books_borrowed,
        books_borrowed: stats.books_borrowed,
        borrowers: stats.borrowers,
    }))
}
