//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::not_blank;

/// Catalog book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Set once the book has been borrowed
    pub is_borrowed: bool,
}

/// Create (or fully replace) book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Author must be at most 255 characters")
    )]
    pub author: String,
}

/// Partial book update request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Title must be at most 255 characters")
    )]
    pub title: Option<String>,
    #[validate(
        custom(function = "not_blank"),
        length(max = 255, message = "Author must be at most 255 characters")
    )]
    pub author: Option<String>,
}

impl From<CreateBook> for UpdateBook {
    fn from(data: CreateBook) -> Self {
        Self {
            title: Some(data.title),
            author: Some(data.author),
        }
    }
}

/// Book list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only books with this borrowed state
    pub is_borrowed: Option<bool>,
    /// Exact author match
    pub author: Option<String>,
}
