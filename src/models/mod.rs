//! Data models for Libris

pub mod book;
pub mod borrowed_book;
pub mod borrower;

use validator::ValidationError;

// Re-export commonly used types
pub use book::{Book, BookQuery, CreateBook, UpdateBook};
pub use borrowed_book::{BorrowRequest, BorrowedBook};
pub use borrower::{Borrower, CreateBorrower, UpdateBorrower};

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("This field may not be blank".into());
        return Err(err);
    }
    Ok(())
}
