//! Session entity - One row per issued bearer token.
//!
//! Authentication requires both a valid JWT and a matching session row, so
//! tokens can be revoked server-side by deleting the row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Session database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Unique identifier for the session
    #[sea_orm(primary_key)]
    pub id: i32,
    /// ID of the user this session belongs to
    pub user_id: i32,
    /// The bearer token issued for this session
    pub token: String,
    /// When the session was created
    pub created_at: DateTimeUtc,
    /// When the session was last updated
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Session and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each session belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
