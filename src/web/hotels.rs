//! Hotel endpoints.
//!
//! Both routes run the eligibility gate first: the caller needs a PAID,
//! non-remote, hotel-inclusive ticket. The id parameter of `GET /hotels/:id`
//! is taken as a raw string so a non-numeric value answers 400 before any
//! eligibility check touches the database.

use crate::{
    core::{hotels, tickets},
    entities::{hotel, room},
    errors::{Error, Result},
    web::{AppState, auth::AuthUser},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Hotel summary as returned by `GET /hotels`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<hotel::Model> for HotelResponse {
    fn from(model: hotel::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Room as nested under a hotel in `GET /hotels/:id`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<room::Model> for RoomResponse {
    fn from(model: room::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            capacity: model.capacity,
            hotel_id: model.hotel_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Hotel detail with its rooms, as returned by `GET /hotels/:id`.
///
/// `Rooms` keeps the capitalized key of the original wire format.
#[derive(Debug, Serialize)]
pub struct HotelWithRoomsResponse {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    #[serde(rename = "Rooms")]
    pub rooms: Vec<RoomResponse>,
}

/// `GET /hotels` - lists every hotel for an eligible caller.
pub async fn get_hotels(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<HotelResponse>>> {
    tickets::verify_hotel_eligibility(&state.db, user.user_id).await?;

    let hotels = hotels::find_all_hotels(&state.db).await?;
    Ok(Json(hotels.into_iter().map(Into::into).collect()))
}

/// `GET /hotels/:id` - one hotel with its rooms for an eligible caller.
pub async fn get_hotel(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<HotelWithRoomsResponse>> {
    // Only non-numeric input is a 400; numeric ids beyond the entity id
    // range are simply hotels that cannot exist and fall through to 404.
    let hotel_id: i64 = id
        .parse()
        .map_err(|_| Error::bad_request("hotel id must be numeric"))?;

    tickets::verify_hotel_eligibility(&state.db, user.user_id).await?;

    let hotel_id = i32::try_from(hotel_id).map_err(|_| Error::not_found())?;
    let (hotel, rooms) = hotels::find_hotel_with_rooms(&state.db, hotel_id).await?;
    Ok(Json(HotelWithRoomsResponse {
        hotel: hotel.into(),
        rooms: rooms.into_iter().map(Into::into).collect(),
    }))
}
