//! Gamification progress routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::routes::auth::AuthUser;
use crate::services::progress::{self, ProgressError};
use crate::state::AppState;

/// `GET /api/progress` — XP/streak summary for the badge.
pub async fn get_progress(State(state): State<AppState>, auth: AuthUser) -> Response {
    let today = OffsetDateTime::now_utc().date();
    match progress::fetch_summary(&state.pool, auth.user.id, today).await {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %auth.user.id, "progress summary failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct EventBody {
    kind: String,
    xp: i32,
}

/// `POST /api/progress/events` — record a completed activity awarding XP.
pub async fn record_progress_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<EventBody>,
) -> Response {
    match progress::record_event(&state.pool, auth.user.id, &body.kind, body.xp).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(ProgressError::InvalidEvent) => (StatusCode::BAD_REQUEST, "invalid event").into_response(),
        Err(e) => {
            tracing::error!(error = %e, user_id = %auth.user.id, "activity event insert failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
