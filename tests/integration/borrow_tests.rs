use axum::http::StatusCode;
use serde_json::json;

use crate::TestApp;

#[tokio::test]
async fn test_end_to_end_workflow() {
    let app = TestApp::new().await;

    let (status, borrower) = app.post("/api/borrowers/", json!({ "name": "John Doe" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(borrower["id"], 1);

    let (status, book) = app
        .post(
            "/api/books/",
            json!({ "title": "Django for APIs", "author": "William S. Vincent" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["id"], 1);

    let (status, body) = app.post("/api/books/1/borrow/", json!({ "borrower_id": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book borrowed successfully.");
    assert_eq!(body["borrowed_book"]["book"], 1);

    let (status, body) = app.get("/api/borrowers/1/borrowed_books/").await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["book"], 1);
    assert_eq!(records[0]["borrower"], 1);
    assert!(records[0]["borrowed_at"].is_string());
}

#[tokio::test]
async fn test_borrow_persists_book_state() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let book = app.book("Django for APIs", "William S. Vincent").await;

    let (status, _) = app.borrow(book, borrower).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get(&format!("/api/books/{}/", book)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_borrowed"], true);
}

#[tokio::test]
async fn test_borrow_book_already_borrowed() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let book = app.book("Python Crash Course", "Eric Matthes").await;

    let (status, _) = app.borrow(book, borrower).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.borrow(book, borrower).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "AlreadyBorrowed");

    assert_eq!(app.borrow_records(book).await, 1);
}

#[tokio::test]
async fn test_borrow_book_invalid_borrower() {
    let app = TestApp::new().await;
    let book = app.book("Python Crash Course", "Eric Matthes").await;

    let (status, _) = app.borrow(book, 999).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get(&format!("/api/books/{}/", book)).await;
    assert_eq!(body["is_borrowed"], false);
    assert_eq!(app.borrow_records(book).await, 0);
}

#[tokio::test]
async fn test_borrow_missing_book() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;

    let (status, _) = app.borrow(42, borrower).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_borrow_without_borrower_id() {
    let app = TestApp::new().await;
    let book = app.book("Python Crash Course", "Eric Matthes").await;

    let (status, body) = app.post(&format!("/api/books/{}/borrow/", book), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Borrower not found.");

    let (_, body) = app.get(&format!("/api/books/{}/", book)).await;
    assert_eq!(body["is_borrowed"], false);
}

#[tokio::test]
async fn test_borrowed_books_empty_then_two() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let uri = format!("/api/borrowers/{}/borrowed_books/", borrower);

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let book1 = app.book("Book 1", "Author 1").await;
    let book2 = app.book("Book 2", "Author 2").await;
    app.borrow(book1, borrower).await;
    app.borrow(book2, borrower).await;

    let (status, body) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r["borrower"] == borrower));
}

#[tokio::test]
async fn test_borrowed_books_unknown_borrower() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/api/borrowers/999/borrowed_books/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_drops_its_records() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let book = app.book("Django for APIs", "William S. Vincent").await;
    app.borrow(book, borrower).await;

    let (status, _) = app
        .send(axum::http::Method::DELETE, &format!("/api/books/{}/", book), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app.get(&format!("/api/borrowers/{}/borrowed_books/", borrower)).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_borrows_single_winner() {
    // Removed on drop, WAL and SHM files included
    let dir = tempfile::tempdir().unwrap();
    let app = TestApp::with_file(&dir.path().join("libris.db")).await;
    let book = app.book("Django for APIs", "William S. Vincent").await;
    let mut borrowers = Vec::new();
    for i in 0..8 {
        borrowers.push(app.borrower(&format!("Reader {}", i)).await);
    }

    let handles: Vec<_> = borrowers
        .into_iter()
        .map(|borrower| {
            let app = app.clone();
            tokio::spawn(async move { app.borrow(book, borrower).await.0 })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    let wins = statuses.iter().filter(|s| **s == StatusCode::OK).count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(wins, 1, "statuses: {:?}", statuses);
    assert_eq!(conflicts, statuses.len() - 1, "statuses: {:?}", statuses);

    assert_eq!(app.borrow_records(book).await, 1);
}

#[tokio::test]
async fn test_borrow_with_string_borrower_id() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let book = app.book("Django for APIs", "William S. Vincent").await;

    let (status, body) = app
        .post(
            &format!("/api/books/{}/borrow/", book),
            json!({ "borrower_id": borrower.to_string() }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["borrowed_book"]["borrower"], borrower);
}

#[tokio::test]
async fn test_borrow_from_form_body() {
    let app = TestApp::new().await;
    let borrower = app.borrower("John Doe").await;
    let book = app.book("Django for APIs", "William S. Vincent").await;

    let (status, body) = app
        .post_form(
            &format!("/api/books/{}/borrow/", book),
            &format!("borrower_id={}", borrower),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book borrowed successfully.");
    assert_eq!(app.borrow_records(book).await, 1);
}

#[tokio::test]
async fn test_borrow_with_non_numeric_borrower_id() {
    let app = TestApp::new().await;
    let book = app.book("Django for APIs", "William S. Vincent").await;

    let (status, _) = app
        .post(
            &format!("/api/books/{}/borrow/", book),
            json!({ "borrower_id": "abc" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.borrow_records(book).await, 0);
}
