//! Repository layer for database operations

pub mod books;
pub mod borrowed_books;
pub mod borrowers;

use sqlx::{FromRow, Pool, Sqlite};

use crate::error::AppResult;

/// Row counts reported by the readiness endpoint
#[derive(Debug, Clone, Copy, FromRow)]
pub struct CatalogStats {
    pub books: i64,
    pub books_borrowed: i64,
    pub borrowers: i64,
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub books: books::BooksRepository,
    pub borrowers: borrowers::BorrowersRepository,
    pub borrowed_books: borrowed_books::BorrowedBooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            borrowers: borrowers::BorrowersRepository::new(pool.clone()),
            borrowed_books: borrowed_books::BorrowedBooksRepository::new(pool.clone()),
            pool,
        }
    }

    /// Catalog totals, read in a single query
    pub async fn stats(&self) -> AppResult<CatalogStats> {
        let stats = sqlx::query_as::<_, CatalogStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM books) AS books,
                (SELECT COUNT(*) FROM books WHERE is_borrowed = 1) AS books_borrowed,
                (SELECT COUNT(*) FROM borrowers) AS borrowers
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}
