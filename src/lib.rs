//! Biblioteca Library Catalog Management System
//!
//! A Rust REST JSON API for managing a library's book catalog:
//! registration, search, full updates, and loan/return availability
//! tracking backed by PostgreSQL.

use std::sync::Arc;

pub mod api;
pub mod config;
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
