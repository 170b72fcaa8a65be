//! Hotel entity - An accommodation option offered alongside the event.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hotel database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hotels")]
pub struct Model {
    /// Unique identifier for the hotel
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Hotel name
    pub name: String,
    /// URL of the hotel's display image
    pub image: String,
    /// When the hotel was created
    pub created_at: DateTimeUtc,
    /// When the hotel was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Hotel and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One hotel has many rooms
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
