//! Catalog management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        self.repository.books.list(query).await
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books.create(data).await?;
        tracing::info!(book_id = book.id, "Catalog: created book '{}'", book.title);
        Ok(book)
    }

    /// Replace title and author (PUT)
    pub async fn replace_book(&self, id: i64, data: CreateBook) -> AppResult<Book> {
        data.validate()?;
        self.repository.books.update(id, &UpdateBook::from(data)).await
    }

    /// Update only the provided fields (PATCH)
    pub async fn update_book(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        self.repository.books.update(id, data).await
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = id, "Catalog: deleted book");
        Ok(())
    }
}
