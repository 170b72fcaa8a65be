//! Payment endpoints.
//!
//! `GET /payments?ticketId=` returns the payment for an owned ticket;
//! `POST /payments/process` charges a card and flips the ticket to PAID.
//! Ownership is enforced by the service layer on both routes.

use crate::{
    core::payments::{self, CardData},
    entities::payment,
    errors::{Error, Result},
    web::{AppState, auth::AuthUser},
};
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query string of `GET /payments`.
///
/// `ticketId` is kept as a raw string so a missing or non-numeric value can
/// answer 400 instead of a framework rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    pub ticket_id: Option<String>,
}

/// JSON body of `POST /payments/process`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub ticket_id: i32,
    pub card_data: CardData,
}

/// Payment record as returned by both payment routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i32,
    pub ticket_id: i32,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<payment::Model> for PaymentResponse {
    fn from(model: payment::Model) -> Self {
        Self {
            id: model.id,
            ticket_id: model.ticket_id,
            value: model.value,
            card_issuer: model.card_issuer,
            card_last_digits: model.card_last_digits,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// `GET /payments?ticketId=` - the payment row for an owned ticket.
pub async fn get_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PaymentQuery>,
) -> Result<Json<PaymentResponse>> {
    let ticket_id: i32 = query
        .ticket_id
        .ok_or_else(|| Error::bad_request("ticketId is required"))?
        .parse()
        .map_err(|_| Error::bad_request("ticketId must be numeric"))?;

    let payment = payments::get_payment_by_ticket(&state.db, user.user_id, ticket_id)
        .await?
        .ok_or_else(Error::not_found)?;

    Ok(Json(payment.into()))
}

/// Validates submitted card data before the service runs.
///
/// Issuer and holder name must be present, number and cvv must be all
/// digits; anything else answers 400 without touching the database.
fn validate_card_data(card: &CardData) -> Result<()> {
    if card.issuer.trim().is_empty() {
        return Err(Error::bad_request("card issuer is required"));
    }
    if card.name.trim().is_empty() {
        return Err(Error::bad_request("cardholder name is required"));
    }
    if card.number.is_empty() || !card.number.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::bad_request("card number must be numeric"));
    }
    if card.cvv.is_empty() || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::bad_request("card cvv must be numeric"));
    }
    Ok(())
}

/// `POST /payments/process` - charges a card and marks the ticket PAID.
pub async fn process_payment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>> {
    validate_card_data(&body.card_data)?;

    let payment =
        payments::process_payment(&state.db, body.ticket_id, user.user_id, body.card_data).await?;

    Ok(Json(payment.into()))
}
