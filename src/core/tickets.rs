//! Ticket lookups and the hotel-access eligibility gate.
//!
//! A user reaches the hotel endpoints only with a PAID ticket whose type is
//! not remote and includes hotel accommodation. The gate is a pure decision
//! over fetched state; it performs no writes.

use crate::{
    entities::{Enrollment, Ticket, TicketStatus, TicketType, enrollment, ticket, ticket_type},
    errors::{Error, Result},
};
use sea_orm::prelude::*;

/// Fetches the ticket belonging to a user, together with its ticket type.
///
/// Resolution goes user → enrollment → ticket: a missing enrollment or a
/// missing ticket both surface as NotFound.
pub async fn get_ticket_with_type_by_user(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<(ticket::Model, ticket_type::Model)> {
    let enrollment = Enrollment::find()
        .filter(enrollment::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or_else(Error::not_found)?;

    let (ticket, ticket_type) = Ticket::find()
        .filter(ticket::Column::EnrollmentId.eq(enrollment.id))
        .find_also_related(TicketType)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)?;

    // The foreign key guarantees a type row; a missing one is a data error.
    let ticket_type = ticket_type.ok_or_else(Error::not_found)?;

    Ok((ticket, ticket_type))
}

/// Decides whether a ticket grants access to hotel-related queries.
///
/// Fails with PaymentRequired when the ticket is unpaid, remote, or does not
/// include hotel accommodation. No side effects.
pub fn assert_hotel_access(
    ticket: &ticket::Model,
    ticket_type: &ticket_type::Model,
) -> Result<()> {
    if ticket.status != TicketStatus::Paid {
        return Err(Error::payment_required());
    }
    if ticket_type.is_remote || !ticket_type.includes_hotel {
        return Err(Error::payment_required());
    }
    Ok(())
}

/// Runs the full eligibility gate for a user: ticket lookup plus access check.
pub async fn verify_hotel_eligibility(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    let (ticket, ticket_type) = get_ticket_with_type_by_user(db, user_id).await?;
    assert_hotel_access(&ticket, &ticket_type)
}
