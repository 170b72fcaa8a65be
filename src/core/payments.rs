//! Payment processing - ownership checks, payment lookup and creation.
//!
//! Processing a payment writes two rows (the payment itself and the ticket's
//! status flip to PAID); both happen inside one database transaction so a
//! partial failure cannot leave a paid-for ticket stuck in RESERVED.

use crate::{
    entities::{
        Enrollment, Payment, Ticket, TicketStatus, TicketType, payment, ticket,
    },
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, TransactionTrait, prelude::*};
use serde::Deserialize;

/// Card details submitted for payment processing.
///
/// Only the issuer and the last four digits of the number are ever persisted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    /// Card network / issuing brand (e.g., "VISA")
    pub issuer: String,
    /// Full card number; masked before storage
    pub number: String,
    /// Cardholder name
    pub name: String,
    /// Expiration date as printed on the card
    pub expiration_date: String,
    /// Card verification value
    pub cvv: String,
}

/// Verifies that `ticket_id` exists and belongs to `user_id`.
///
/// A missing ticket or enrollment is NotFound; an enrollment owned by a
/// different user is Unauthorized. Returns the ticket for further use.
pub async fn verify_ticket_ownership(
    db: &DatabaseConnection,
    ticket_id: i32,
    user_id: i32,
) -> Result<ticket::Model> {
    let ticket = Ticket::find_by_id(ticket_id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)?;

    let enrollment = Enrollment::find_by_id(ticket.enrollment_id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)?;

    if enrollment.user_id != user_id {
        return Err(Error::unauthorized());
    }

    Ok(ticket)
}

/// Returns the payment row for a ticket after checking ownership.
///
/// The payment may be absent when the ticket has not been processed yet.
pub async fn get_payment_by_ticket(
    db: &DatabaseConnection,
    user_id: i32,
    ticket_id: i32,
) -> Result<Option<payment::Model>> {
    verify_ticket_ownership(db, ticket_id, user_id).await?;

    Payment::find()
        .filter(payment::Column::TicketId.eq(ticket_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Processes a card payment for a ticket.
///
/// Checks ownership, reads the price from the ticket type, stores a payment
/// row with the card number masked to its last four digits, and transitions
/// the ticket to PAID. Payment creation and the status update share one
/// transaction.
pub async fn process_payment(
    db: &DatabaseConnection,
    ticket_id: i32,
    user_id: i32,
    card: CardData,
) -> Result<payment::Model> {
    let ticket = verify_ticket_ownership(db, ticket_id, user_id).await?;

    let txn = db.begin().await?;

    let ticket_type = TicketType::find_by_id(ticket.ticket_type_id)
        .one(&txn)
        .await?
        .ok_or_else(Error::not_found)?;

    let now = Utc::now();
    let payment_model = payment::ActiveModel {
        ticket_id: Set(ticket_id),
        value: Set(ticket_type.price),
        card_issuer: Set(card.issuer),
        card_last_digits: Set(mask_card_number(&card.number)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = payment_model.insert(&txn).await?;

    let mut paid_ticket: ticket::ActiveModel = ticket.into();
    paid_ticket.status = Set(TicketStatus::Paid);
    paid_ticket.updated_at = Set(now);
    paid_ticket.update(&txn).await?;

    txn.commit().await?;

    Ok(created)
}

/// Keeps only the last four characters of a card number.
///
/// Operates on characters rather than bytes so unexpected input can never
/// split a multi-byte character.
fn mask_card_number(number: &str) -> String {
    let chars: Vec<char> = number.chars().collect();
    let cut = chars.len().saturating_sub(4);
    chars[cut..].iter().collect()
}
