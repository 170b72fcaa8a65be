//! Room entity - A bookable room inside a hotel.
//!
//! A room always references an existing hotel through its foreign key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Unique identifier for the room
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Room name or number
    pub name: String,
    /// Maximum number of guests the room holds
    pub capacity: i32,
    /// ID of the hotel this room belongs to
    pub hotel_id: i32,
    /// When the room was created
    pub created_at: DateTimeUtc,
    /// When the room was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Room and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each room belongs to one hotel
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
