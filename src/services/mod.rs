//! Business logic services

pub mod borrowers;
pub mod catalog;
pub mod loans;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub borrowers: borrowers::BorrowersService,
    pub loans: loans::LoansService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            borrowers: borrowers::BorrowersService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            repository,
        }
    }
}
