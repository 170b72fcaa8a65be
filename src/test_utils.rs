//! Shared test utilities for the booking API.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults, mirroring the seed data
//! the API expects in production.

use crate::{
    entities::{self, TicketStatus, enrollment, hotel, payment, room, session, ticket, ticket_type, user},
    errors::Result,
    web::auth,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::atomic::{AtomicU32, Ordering};

/// Secret used to sign tokens in tests.
pub const TEST_JWT_SECRET: &str = "test-secret";

/// Monotonic counter so factories can mint unique emails.
static EMAIL_SEQ: AtomicU32 = AtomicU32::new(0);

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with a unique email.
pub async fn create_test_user(db: &DatabaseConnection) -> Result<entities::user::Model> {
    let n = EMAIL_SEQ.fetch_add(1, Ordering::Relaxed);
    let now = Utc::now();
    user::ActiveModel {
        email: Set(format!("user{n}@example.com")),
        password: Set("hashed-password".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Signs a bearer token for the user and records the matching session row.
/// Tokens created this way pass the authentication middleware.
pub async fn generate_valid_token(
    db: &DatabaseConnection,
    user: &entities::user::Model,
) -> Result<String> {
    let token = auth::sign_token(user.id, TEST_JWT_SECRET)?;
    let now = Utc::now();
    session::ActiveModel {
        user_id: Set(user.id),
        token: Set(token.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(token)
}

/// Creates a test enrollment binding a ticket to the given user.
pub async fn create_test_enrollment(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entities::enrollment::Model> {
    let now = Utc::now();
    enrollment::ActiveModel {
        name: Set("Test Registrant".to_string()),
        user_id: Set(user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a ticket type with the given eligibility flags.
///
/// # Defaults
/// * `price`: 25000
pub async fn create_ticket_type(
    db: &DatabaseConnection,
    is_remote: bool,
    includes_hotel: bool,
) -> Result<entities::ticket_type::Model> {
    let now = Utc::now();
    ticket_type::ActiveModel {
        name: Set("Test Ticket Type".to_string()),
        price: Set(25000),
        is_remote: Set(is_remote),
        includes_hotel: Set(includes_hotel),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a ticket for an enrollment with the given status.
pub async fn create_test_ticket(
    db: &DatabaseConnection,
    enrollment_id: i32,
    ticket_type_id: i32,
    status: TicketStatus,
) -> Result<entities::ticket::Model> {
    let now = Utc::now();
    ticket::ActiveModel {
        ticket_type_id: Set(ticket_type_id),
        enrollment_id: Set(enrollment_id),
        status: Set(status),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test hotel.
///
/// # Defaults
/// * `image`: a placeholder URL
pub async fn create_test_hotel(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::hotel::Model> {
    let now = Utc::now();
    hotel::ActiveModel {
        name: Set(name.to_string()),
        image: Set("https://example.com/hotel.jpg".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a test room inside a hotel.
///
/// # Defaults
/// * `capacity`: 3
pub async fn create_test_room(
    db: &DatabaseConnection,
    hotel_id: i32,
    name: &str,
) -> Result<entities::room::Model> {
    let now = Utc::now();
    room::ActiveModel {
        name: Set(name.to_string()),
        capacity: Set(3),
        hotel_id: Set(hotel_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}

/// Creates a payment row for a ticket, bypassing card processing.
pub async fn create_test_payment(
    db: &DatabaseConnection,
    ticket_id: i32,
    value: i32,
) -> Result<entities::payment::Model> {
    let now = Utc::now();
    payment::ActiveModel {
        ticket_id: Set(ticket_id),
        value: Set(value),
        card_issuer: Set("VISA".to_string()),
        card_last_digits: Set("1234".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
