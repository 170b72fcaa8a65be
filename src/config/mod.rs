//! Configuration management for the booking API.
//!
//! All configuration comes from the environment (optionally via a `.env` file
//! loaded in `main`). Database schema setup lives in [`database`].

/// Database connection and table creation
pub mod database;

use crate::errors::{Error, Result};
use std::env;

/// Default SQLite database location when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/booking.sqlite?mode=rwc";

/// Default port the HTTP server binds when `PORT` is not set.
const DEFAULT_PORT: u16 = 4000;

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for the relational store
    pub database_url: String,
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

/// Loads the application configuration from environment variables.
///
/// `JWT_SECRET` is mandatory; `DATABASE_URL` and `PORT` fall back to local
/// defaults so the server can run out of the box.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let jwt_secret = env::var("JWT_SECRET")
        .map_err(|_| Error::Config("JWT_SECRET must be set".to_string()))?;

    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| Error::Config(format!("PORT is not a valid port number: {raw}")))?,
        Err(_) => DEFAULT_PORT,
    };

    Ok(AppConfig {
        database_url,
        jwt_secret,
        port,
    })
}
