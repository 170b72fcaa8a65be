//! Hotel queries - listing hotels and fetching a hotel with its rooms.
//!
//! Numeric id validation is the HTTP caller's responsibility; these functions
//! only deal in already-parsed ids.

use crate::{
    entities::{Hotel, Room, hotel, room},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, prelude::*};

/// Returns every hotel on record, ordered by id.
///
/// An empty collection is reported as NotFound rather than an empty list.
pub async fn find_all_hotels(db: &DatabaseConnection) -> Result<Vec<hotel::Model>> {
    let hotels = Hotel::find()
        .order_by_asc(hotel::Column::Id)
        .all(db)
        .await?;

    if hotels.is_empty() {
        return Err(Error::not_found());
    }

    Ok(hotels)
}

/// Returns the hotel matching `id` together with its rooms.
///
/// The rooms list may be empty; a missing hotel is NotFound.
pub async fn find_hotel_with_rooms(
    db: &DatabaseConnection,
    id: i32,
) -> Result<(hotel::Model, Vec<room::Model>)> {
    let hotel = Hotel::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(Error::not_found)?;

    let rooms = hotel
        .find_related(Room)
        .order_by_asc(room::Column::Id)
        .all(db)
        .await?;

    Ok((hotel, rooms))
}
