//! Borrow event records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Append-only record linking a book to the borrower who took it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    pub id: i64,
    /// Book ID
    #[sqlx(rename = "book_id")]
    pub book: i64,
    /// Borrower ID
    #[sqlx(rename = "borrower_id")]
    pub borrower: i64,
    pub borrowed_at: DateTime<Utc>,
}

/// Borrow request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct BorrowRequest {
    /// Accepts a number or a numeric string, as form fields arrive as text
    #[serde(default, deserialize_with = "lenient_id")]
    pub borrower_id: Option<i64>,
}

impl BorrowRequest {
    /// The requested borrower; an absent id names no borrower at all
    pub fn borrower_id(&self) -> AppResult<i64> {
        self.borrower_id
            .ok_or_else(|| AppError::NotFound("Borrower not found.".to_string()))
    }
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid borrower id: {:?}", text))),
    }
}
