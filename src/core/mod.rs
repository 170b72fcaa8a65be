//! Core business logic - framework-agnostic services over the entity layer.
//!
//! Each submodule exposes async functions that take a database connection and
//! return `Result` values; the HTTP layer decides how failures map to status
//! codes.

/// Hotel queries - listing hotels and fetching a hotel with its rooms
pub mod hotels;
/// Payment processing - ownership checks, payment lookup and creation
pub mod payments;
/// Ticket lookups and the hotel-access eligibility gate
pub mod tickets;
