//! ReadBookList
//!
//! A small personal reading list: a server-rendered HTML application for
//! listing, adding, editing and deleting books stored in SQLite.

use std::sync::Arc;

use axum_extra::extract::cookie::Key;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Signing key for the flash cookie, derived from `security.secret_key`
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let cookie_key = config.security.cookie_key();
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            cookie_key,
        }
    }
}
