//! Shared application state for Axum handlers.

use crate::config::AppConfig;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cheap to clone: the database connection is a pooled handle and the config
/// sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
    /// Resolved application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates the shared state from a connection and configuration.
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
