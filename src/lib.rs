//! Library Records
//!
//! A small record server for library books, students and the loans linking
//! them, exposing create/read/update/delete/list operations over a REST
//! JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};

use repository::Repository;
use services::{Services, SystemClock};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build empty in-memory stores and the services over them
    pub fn new(config: AppConfig) -> Self {
        let services = Services::new(Repository::new(), Arc::new(SystemClock::new()));
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
