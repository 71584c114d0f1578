//! Borrow records and the borrow transition

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::borrowed_book::BorrowedBook,
};

#[derive(Clone)]
pub struct BorrowedBooksRepository {
    pool: Pool<Sqlite>,
}

impl BorrowedBooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Borrow records of a borrower, oldest first
    pub async fn list_for_borrower(&self, borrower_id: i64) -> AppResult<Vec<BorrowedBook>> {
        let rows = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE borrower_id = ? ORDER BY id",
        )
        .bind(borrower_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Mark a book borrowed and record who took it, in one transaction.
    ///
    /// The conditional update runs first so it takes the SQLite write lock
    /// before anything is read: a competing borrow waits for the commit, then
    /// matches zero rows. Nothing is written when the borrower is missing.
    pub async fn borrow(&self, book_id: i64, borrower_id: i64) -> AppResult<BorrowedBook> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query("UPDATE books SET is_borrowed = 1 WHERE id = ? AND is_borrowed = 0")
            .bind(book_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if claimed == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = ?)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;
            tx.rollback().await?;

            return Err(if exists {
                AppError::Conflict("Book is already borrowed.".to_string())
            } else {
                AppError::NotFound(format!("Book {} not found", book_id))
            });
        }

        let borrower_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM borrowers WHERE id = ?)")
                .bind(borrower_id)
                .fetch_one(&mut *tx)
                .await?;

        if !borrower_exists {
            tx.rollback().await?;
            return Err(AppError::NotFound("Borrower not found.".to_string()));
        }

        let record = sqlx::query_as::<_, BorrowedBook>(
            r#"
            INSERT INTO borrowed_books (book_id, borrower_id, borrowed_at)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(book_id)
        .bind(borrower_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }
}
