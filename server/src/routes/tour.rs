//! Per-user tour completion routes.
//!
//! Tour step content lives in the client's presentation layer; the server
//! only records which named tours a user has completed or dismissed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use sqlx::Row;

use crate::routes::auth::AuthUser;
use crate::state::AppState;

const MAX_TOUR_NAME_LEN: usize = 64;

pub(crate) fn valid_tour_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TOUR_NAME_LEN
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct TourStatusResponse {
    completed: Vec<String>,
    dismissed: Vec<String>,
}

/// Split `(tour, dismissed)` rows into the response's two lists.
pub(crate) fn partition_status(rows: Vec<(String, bool)>) -> TourStatusResponse {
    let mut status = TourStatusResponse::default();
    for (tour, dismissed) in rows {
        if dismissed {
            status.dismissed.push(tour);
        } else {
            status.completed.push(tour);
        }
    }
    status
}

/// `GET /api/tour` — tours this user has completed or dismissed.
pub async fn get_tour_status(State(state): State<AppState>, auth: AuthUser) -> Response {
    let rows = sqlx::query("SELECT tour, dismissed FROM tour_progress WHERE user_id = $1 ORDER BY seen_at")
        .bind(auth.user.id)
        .fetch_all(&state.pool)
        .await;

    match rows {
        Ok(rows) => {
            let pairs = rows
                .into_iter()
                .map(|r| (r.get("tour"), r.get("dismissed")))
                .collect::<Vec<(String, bool)>>();
            Json(partition_status(pairs)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = %auth.user.id, "tour status fetch failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct TourUpdateBody {
    tour: String,
    #[serde(default)]
    dismissed: bool,
}

/// `POST /api/tour` — mark a tour completed or dismissed. A later
/// completion overwrites an earlier dismissal and vice versa.
pub async fn record_tour_seen(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<TourUpdateBody>,
) -> Response {
    if !valid_tour_name(&body.tour) {
        return (StatusCode::BAD_REQUEST, "invalid tour name").into_response();
    }

    let result = sqlx::query(
        r"INSERT INTO tour_progress (user_id, tour, dismissed)
          VALUES ($1, $2, $3)
          ON CONFLICT (user_id, tour)
          DO UPDATE SET dismissed = EXCLUDED.dismissed, seen_at = now()",
    )
    .bind(auth.user.id)
    .bind(&body.tour)
    .bind(body.dismissed)
    .execute(&state.pool)
    .await;

    match result {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %auth.user.id, "tour progress upsert failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "tour_test.rs"]
mod tests;
