//! Ticket type entity - A category of event ticket.
//!
//! The type determines the price and whether the ticket is for remote
//! attendance or includes hotel accommodation. Those two flags drive the
//! hotel-access eligibility gate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ticket type database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ticket_types")]
pub struct Model {
    /// Unique identifier for the ticket type
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-readable name of the ticket type (e.g., "Presential + Hotel")
    pub name: String,
    /// Ticket price
    pub price: i32,
    /// Whether this ticket is for remote attendance
    pub is_remote: bool,
    /// Whether this ticket includes hotel accommodation
    pub includes_hotel: bool,
    /// When the ticket type was created
    pub created_at: DateTimeUtc,
    /// When the ticket type was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between TicketType and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One ticket type has many tickets
    #[sea_orm(has_many = "super::ticket::Entity")]
    Tickets,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
