//! API integration tests

mod borrow_tests;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

use libris_server::{api, config::AppConfig, config::DatabaseConfig, db, AppState};

/// Router plus the state behind it
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App backed by a fresh in-memory database
    pub async fn new() -> Self {
        let pool = db::connect_in_memory()
            .await
            .expect("Failed to init DB");
        Self::with_pool(pool)
    }

    /// App backed by a database file with a multi-connection pool
    pub async fn with_file(path: &std::path::Path) -> Self {
        let config = DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 8,
            min_connections: 1,
        };
        let pool = db::connect(&config).await.expect("Failed to open DB file");
        Self::with_pool(pool)
    }

    fn with_pool(pool: sqlx::Pool<sqlx::Sqlite>) -> Self {
        let state = AppState::new(AppConfig::default(), pool);
        Self {
            router: api::create_router(state.clone()),
            state,
        }
    }

    /// Send a request and decode the JSON response (`Null` when empty)
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Create a borrower and return its id
    pub async fn borrower(&self, name: &str) -> i64 {
        let (status, body) = self
            .post("/api/borrowers/", serde_json::json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().expect("No borrower ID")
    }

    /// Create a book and return its id
    pub async fn book(&self, title: &str, author: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/books/",
                serde_json::json!({ "title": title, "author": author }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().expect("No book ID")
    }

    /// Borrow records stored for a book, read straight from the database
    pub async fn borrow_records(&self, book_id: i64) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM borrowed_books WHERE book_id = ?")
            .bind(book_id)
            .fetch_one(&self.state.services.repository.pool)
            .await
            .unwrap()
    }

    /// Send an `application/x-www-form-urlencoded` body
    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        self.post_raw(uri, "application/x-www-form-urlencoded", form).await
    }

    /// POST a body verbatim with the given content type
    pub async fn post_raw(&self, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    pub async fn borrow(&self, book_id: i64, borrower_id: i64) -> (StatusCode, Value) {
        self.post(
            &format!("/api/books/{}/borrow/", book_id),
            serde_json::json!({ "borrower_id": borrower_id }),
        )
        .await
    }
}
