//! Borrowing service

use crate::{error::AppResult, models::borrowed_book::BorrowedBook, repository::Repository};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a borrower.
    ///
    /// Fails with `NotFound` for an unknown book or borrower and with
    /// `Conflict` when the book is already borrowed.
    pub async fn borrow_book(&self, book_id: i64, borrower_id: i64) -> AppResult<BorrowedBook> {
        match self.repository.borrowed_books.borrow(book_id, borrower_id).await {
            Ok(record) => {
                tracing::info!(book_id, borrower_id, record_id = record.id, "Book borrowed");
                Ok(record)
            }
            Err(e) => {
                tracing::debug!(book_id, borrower_id, "Borrow refused: {}", e);
                Err(e)
            }
        }
    }

    /// Borrow records of an existing borrower
    pub async fn get_borrower_books(&self, borrower_id: i64) -> AppResult<Vec<BorrowedBook>> {
        // Verify borrower exists
        self.repository.borrowers.get_by_id(borrower_id).await?;
        self.repository.borrowed_books.list_for_borrower(borrower_id).await
    }
}
