//! Session lifecycle: issue, validate, rotate, delete.
//!
//! ARCHITECTURE
//! ============
//! A session is an opaque hex token with two horizons: `expires_at` bounds
//! ordinary authentication, `renew_until` bounds rotation. The refresh
//! endpoint may rotate a token whose access horizon already lapsed as long
//! as its renewal horizon is open; the replacement keeps the original
//! renewal horizon, so a cookie can never renew itself forever.
//!
//! TRADE-OFFS
//! ==========
//! Rotation consumes the old row destructively (`DELETE ... RETURNING`) to
//! guarantee single use; this favors replay safety over tolerating a lost
//! response, which costs the client one extra sign-in.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// User row returned from session validation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email, if the account has one.
    pub email: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

fn session_user_from_row(row: &sqlx::postgres::PgRow) -> SessionUser {
    SessionUser {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        avatar_url: row.get("avatar_url"),
    }
}

/// Create a session for the given user, returning the token. Horizons come
/// from the schema defaults.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token against its access horizon and return the
/// associated user.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT u.id, u.name, u.email, u.avatar_url
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| session_user_from_row(&r)))
}

/// Rotate a session whose renewal horizon is still open.
///
/// Consumes the old token and issues a replacement bound to the same user
/// and the same `renew_until`; the new access horizon is clipped to the
/// renewal horizon. Returns the new token and user, or `None` when the
/// token is unknown or past renewal.
pub async fn rotate_session(pool: &PgPool, token: &str) -> Result<Option<(String, SessionUser)>, sqlx::Error> {
    let consumed = sqlx::query(
        r"DELETE FROM sessions
          WHERE token = $1 AND renew_until > now()
          RETURNING user_id, renew_until",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    let Some(consumed) = consumed else {
        return Ok(None);
    };
    let user_id: Uuid = consumed.get("user_id");
    let renew_until: OffsetDateTime = consumed.get("renew_until");

    let new_token = generate_token();
    sqlx::query(
        r"INSERT INTO sessions (token, user_id, expires_at, renew_until)
          VALUES ($1, $2, LEAST(now() + interval '24 hours', $3), $3)",
    )
    .bind(&new_token)
    .bind(user_id)
    .bind(renew_until)
    .execute(pool)
    .await?;

    let user_row = sqlx::query("SELECT id, name, email, avatar_url FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user_row.map(|r| (new_token, session_user_from_row(&r))))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
