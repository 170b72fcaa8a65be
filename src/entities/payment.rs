//! Payment entity - A processed card payment for a ticket.
//!
//! Only the card issuer and the last four digits of the card number are
//! retained; the full card number never reaches the database.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ID of the ticket this payment settles
    pub ticket_id: i32,
    /// Amount charged, taken from the ticket type's price
    pub value: i32,
    /// Card network / issuing brand (e.g., "VISA")
    pub card_issuer: String,
    /// Last four digits of the card number
    pub card_last_digits: String,
    /// When the payment was created
    pub created_at: DateTimeUtc,
    /// When the payment was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Payment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one ticket
    #[sea_orm(
        belongs_to = "super::ticket::Entity",
        from = "Column::TicketId",
        to = "super::ticket::Column::Id"
    )]
    Ticket,
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
