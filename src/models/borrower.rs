//! Borrower model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Borrower {
    pub id: i64,
    pub name: String,
}

/// Create (or fully replace) borrower request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrower {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Name must be at most 255 characters")
    )]
    pub name: String,
}

/// Partial borrower update request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBorrower {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Name must be at most 255 characters")
    )]
    pub name: Option<String>,
}

impl From<CreateBorrower> for UpdateBorrower {
    fn from(data: CreateBorrower) -> Self {
        Self {
            name: Some(data.name),
        }
    }
}
