//! Database connection and schema setup.
//!
//! Tables are created directly from the entity definitions using SeaORM's
//! `Schema::create_table_from_entity`, so the database schema always matches
//! the Rust struct definitions without hand-written SQL or a migration crate.

use crate::entities::{Enrollment, Hotel, Payment, Room, Session, Ticket, TicketType, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Connects to the relational store at the given URL.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables from the entity definitions, if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Session),
        schema.create_table_from_entity(Enrollment),
        schema.create_table_from_entity(TicketType),
        schema.create_table_from_entity(Ticket),
        schema.create_table_from_entity(Payment),
        schema.create_table_from_entity(Hotel),
        schema.create_table_from_entity(Room),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}

/// Connects to the database and ensures the schema exists.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}
