//! Libris Library Catalog Server
//!
//! A REST JSON API for managing a small library catalog: books, borrowers,
//! and the borrow workflow that links them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repositories and services on top of an open pool
    pub fn new(config: AppConfig, pool: sqlx::Pool<sqlx::Sqlite>) -> Self {
        let repository = repository::Repository::new(pool);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
