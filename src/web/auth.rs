//! Bearer-token authentication middleware.
//!
//! Every protected route requires an `Authorization: Bearer <jwt>` header.
//! The token must decode against the configured secret AND have a matching
//! session row; either failure answers 401 before the handler runs. On
//! success the calling user's id is attached to the request extensions.

use crate::{
    entities::{Session, session},
    errors::{Error, Result},
    web::AppState,
};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sea_orm::prelude::*;
use serde::{Deserialize, Serialize};

/// Token lifetime in seconds (7 days).
const TOKEN_TTL_SECS: usize = 60 * 60 * 24 * 7;

/// JWT claims carried by every bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user
    pub user_id: i32,
    /// Expiration timestamp (seconds since epoch)
    pub exp: usize,
}

/// The authenticated caller, inserted into request extensions by
/// [`authenticate`].
#[derive(Clone, Copy, Debug)]
pub struct AuthUser {
    /// Id of the authenticated user
    pub user_id: i32,
}

/// Signs a bearer token for a user.
pub fn sign_token(user_id: i32, secret: &str) -> Result<String> {
    let claims = Claims {
        user_id,
        exp: Utc::now().timestamp() as usize + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Config(format!("failed to sign token: {e}")))
}

/// Decodes and validates a bearer token, returning its claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| Error::unauthorized())
}

/// Axum middleware resolving the calling user from the Authorization header.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(Error::unauthorized)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or_else(Error::unauthorized)?;

    let claims = decode_token(token, &state.config.jwt_secret)?;

    // A token is only good while its session row exists; deleting the row
    // revokes the token server-side.
    Session::find()
        .filter(session::Column::Token.eq(token))
        .one(&state.db)
        .await?
        .ok_or_else(Error::unauthorized)?;

    request.extensions_mut().insert(AuthUser {
        user_id: claims.user_id,
    });

    Ok(next.run(request).await)
}
