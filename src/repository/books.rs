//! Books repository for database operations

use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List books matching the given filters, oldest first
    pub async fn list(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM books WHERE 1 = 1");

        if let Some(is_borrowed) = query.is_borrowed {
            builder.push(" AND is_borrowed = ").push_bind(is_borrowed);
        }
        if let Some(ref author) = query.author {
            builder.push(" AND author = ").push_bind(author.trim().to_string());
        }
        builder.push(" ORDER BY id");

        let books = builder
            .build_query_as::<Book>()
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a new, available book
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, is_borrowed) VALUES (?, ?, 0) RETURNING *",
        )
        .bind(data.title.trim())
        .bind(data.author.trim())
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Update the given fields; absent fields keep their value
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE(?, title),
                author = COALESCE(?, author)
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.title.as_deref().map(str::trim))
        .bind(data.author.as_deref().map(str::trim))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book along with its borrow records
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
