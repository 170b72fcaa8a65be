//! HTTP interface - router, authentication middleware, and request handlers.
//!
//! Handlers stay thin: they validate raw input, call into [`crate::core`],
//! and shape JSON responses. Domain failures map to status codes through the
//! [`IntoResponse`](axum::response::IntoResponse) impl on
//! [`Error`](crate::errors::Error).

/// Bearer-token authentication middleware and JWT helpers
pub mod auth;
/// Hotel endpoints - listing and per-hotel detail with rooms
pub mod hotels;
/// Payment endpoints - lookup and processing
pub mod payments;
/// Shared application state handed to every handler
pub mod state;

pub use state::AppState;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Builds the API router with every route behind the authentication gate.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/hotels", get(hotels::get_hotels))
        .route("/hotels/:id", get(hotels::get_hotel))
        .route("/payments", get(payments::get_payment))
        .route("/payments/process", post(payments::process_payment))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::authenticate,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
