//! Borrowers repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, CreateBorrower, UpdateBorrower},
};

#[derive(Clone)]
pub struct BorrowersRepository {
    pool: Pool<Sqlite>,
}

impl BorrowersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        let borrowers = sqlx::query_as::<_, Borrower>("SELECT * FROM borrowers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(borrowers)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>("SELECT * FROM borrowers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrower {} not found", id)))
    }

    pub async fn create(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        let borrower =
            sqlx::query_as::<_, Borrower>("INSERT INTO borrowers (name) VALUES (?) RETURNING *")
                .bind(data.name.trim())
                .fetch_one(&self.pool)
                .await?;
        Ok(borrower)
    }

    pub async fn update(&self, id: i64, data: &UpdateBorrower) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>(
            "UPDATE borrowers SET name = COALESCE(?, name) WHERE id = ? RETURNING *",
        )
        .bind(data.name.as_deref().map(str::trim))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrower {} not found", id)))
    }

    /// Delete a borrower who has never borrowed anything.
    ///
    /// The history check and the delete are one statement, so a borrow cannot
    /// slip in between them.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM borrowers
            WHERE id = ?
              AND NOT EXISTS (SELECT 1 FROM borrowed_books WHERE borrower_id = borrowers.id)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Either missing or still referenced
            self.get_by_id(id).await?;
            return Err(AppError::Conflict(format!(
                "Borrower {} has borrowed books",
                id
            )));
        }
        Ok(())
    }
}
