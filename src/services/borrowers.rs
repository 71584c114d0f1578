//! Borrower management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::borrower::{Borrower, CreateBorrower, UpdateBorrower},
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowersService {
    repository: Repository,
}

impl BorrowersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Borrower>> {
        self.repository.borrowers.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Borrower> {
        self.repository.borrowers.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        data.validate()?;
        let borrower = self.repository.borrowers.create(data).await?;
        tracing::info!(borrower_id = borrower.id, "Registered borrower");
        Ok(borrower)
    }

    pub async fn replace(&self, id: i64, data: CreateBorrower) -> AppResult<Borrower> {
        data.validate()?;
        self.repository.borrowers.update(id, &UpdateBorrower::from(data)).await
    }

    pub async fn update(&self, id: i64, data: &UpdateBorrower) -> AppResult<Borrower> {
        data.validate()?;
        self.repository.borrowers.update(id, data).await
    }

    /// Delete a borrower; refused once they have borrow records
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.borrowers.delete(id).await?;
        tracing::info!(borrower_id = id, "Deleted borrower");
        Ok(())
    }
}
