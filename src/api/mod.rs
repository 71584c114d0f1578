//! API handlers for Libris REST endpoints

pub mod books;
pub mod borrowers;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Request body extractor for JSON or urlencoded form payloads.
///
/// Undecodable payloads become `BadRequest`; payloads that decode but do not
/// fit the target type become `Validation`.
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            return match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Payload(value)),
                Err(rejection) => Err(rejection_error(rejection.status(), rejection.body_text())),
            };
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(rejection_error(rejection.status(), rejection.body_text())),
        }
    }
}

fn rejection_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        AppError::Validation(message)
    } else {
        AppError::BadRequest(message)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books/", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id/",
            get(books::get_book)
                .put(books::replace_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        )
        .route("/books/:id/borrow/", post(books::borrow_book))
        // Borrowers
        .route(
            "/borrowers/",
            get(borrowers::list_borrowers).post(borrowers::create_borrower),
        )
        .route(
            "/borrowers/:id/",
            get(borrowers::get_borrower)
                .put(borrowers::replace_borrower)
                .patch(borrowers::update_borrower)
                .delete(borrowers::delete_borrower),
        )
        .route(
            "/borrowers/:id/borrowed_books/",
            get(borrowers::borrowed_books),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
