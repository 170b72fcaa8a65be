//! Ticket entity - A user's registration record for the event.
//!
//! Each ticket references one ticket type and one enrollment, and carries a
//! payment status. Only PAID tickets of a non-remote, hotel-inclusive type
//! grant access to the hotel endpoints.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment status of a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Ticket has been reserved but not paid for
    #[sea_orm(string_value = "RESERVED")]
    Reserved,
    /// Ticket has been paid for
    #[sea_orm(string_value = "PAID")]
    Paid,
}

/// Ticket database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    /// Unique identifier for the ticket
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ID of the ticket type this ticket was purchased as
    pub ticket_type_id: i32,
    /// ID of the enrollment this ticket belongs to
    pub enrollment_id: i32,
    /// Current payment status
    pub status: TicketStatus,
    /// When the ticket was created
    pub created_at: DateTimeUtc,
    /// When the ticket was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Ticket and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ticket belongs to one ticket type
    #[sea_orm(
        belongs_to = "super::ticket_type::Entity",
        from = "Column::TicketTypeId",
        to = "super::ticket_type::Column::Id"
    )]
    TicketType,
    /// Each ticket belongs to one enrollment
    #[sea_orm(
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id"
    )]
    Enrollment,
    /// One ticket has many payments
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::ticket_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketType.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
