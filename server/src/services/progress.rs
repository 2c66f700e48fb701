//! Gamification progress: XP aggregation, level curve, streaks.
//!
//! DESIGN
//! ======
//! XP accrues as immutable `activity_events` rows; everything the badge
//! shows is derived at read time. The level curve and streak rules are
//! pure functions over fetched aggregates so the policy is testable
//! without a database.

use sqlx::{PgPool, Row};
use time::Date;
use uuid::Uuid;

/// XP cost of the first level; each level costs one step more.
pub const LEVEL_STEP_XP: i64 = 100;

/// Upper bound for a single activity's XP award.
pub const MAX_EVENT_XP: i32 = 1000;

const MAX_EVENT_KIND_LEN: usize = 64;

/// Streak window fetched from the database. A year of distinct active days
/// bounds the query; streaks longer than this read as the cap.
const STREAK_WINDOW_DAYS: i64 = 366;

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("invalid activity event")]
    InvalidEvent,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// XP/streak summary returned by `GET /api/progress`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProgressSummary {
    /// Lifetime XP across all recorded activities.
    pub total_xp: i64,
    /// Current level derived from total XP.
    pub level: i32,
    /// XP accumulated inside the current level.
    pub xp_into_level: i64,
    /// XP required to finish the current level.
    pub xp_for_next_level: i64,
    /// Consecutive active days ending today or yesterday (UTC).
    pub streak_days: i64,
}

/// Derive `(level, xp_into_level, xp_for_next_level)` from total XP.
///
/// Level N costs `LEVEL_STEP_XP * N` to finish, so early levels come
/// quickly and the curve stretches out from there. Negative totals clamp
/// to zero.
#[must_use]
pub fn level_for_xp(total_xp: i64) -> (i32, i64, i64) {
    let mut level: i32 = 1;
    let mut remaining = total_xp.max(0);
    loop {
        let cost = LEVEL_STEP_XP * i64::from(level);
        if remaining < cost {
            return (level, remaining, cost);
        }
        remaining -= cost;
        level += 1;
    }
}

/// Count consecutive active days ending today or yesterday.
///
/// `days` must be distinct and sorted descending (the query guarantees
/// both). A streak survives overnight until the end of the next day: a
/// user active yesterday but not yet today still shows their streak.
#[must_use]
pub fn streak_days(days: &[Date], today: Date) -> i64 {
    let Some(&first) = days.first() else {
        return 0;
    };
    let Some(yesterday) = today.previous_day() else {
        return 0;
    };
    if first != today && first != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut expected = first;
    for &day in &days[1..] {
        let Some(prev) = expected.previous_day() else {
            break;
        };
        if day != prev {
            break;
        }
        streak += 1;
        expected = day;
    }
    streak
}

/// Whether an activity event is acceptable for recording.
#[must_use]
pub fn valid_event(kind: &str, xp: i32) -> bool {
    !kind.is_empty() && kind.len() <= MAX_EVENT_KIND_LEN && xp > 0 && xp <= MAX_EVENT_XP
}

/// Assemble the progress summary for a user as of `today` (UTC).
pub async fn fetch_summary(pool: &PgPool, user_id: Uuid, today: Date) -> Result<ProgressSummary, sqlx::Error> {
    let total_row = sqlx::query(
        "SELECT COALESCE(SUM(xp), 0)::BIGINT AS total FROM activity_events WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    let total_xp: i64 = total_row.get("total");

    let day_rows = sqlx::query(
        r"SELECT DISTINCT (created_at AT TIME ZONE 'UTC')::date AS day
          FROM activity_events
          WHERE user_id = $1
          ORDER BY day DESC
          LIMIT $2",
    )
    .bind(user_id)
    .bind(STREAK_WINDOW_DAYS)
    .fetch_all(pool)
    .await?;
    let days: Vec<Date> = day_rows.iter().map(|r| r.get("day")).collect();

    let (level, xp_into_level, xp_for_next_level) = level_for_xp(total_xp);
    Ok(ProgressSummary {
        total_xp,
        level,
        xp_into_level,
        xp_for_next_level,
        streak_days: streak_days(&days, today),
    })
}

/// Record a completed activity awarding XP.
pub async fn record_event(pool: &PgPool, user_id: Uuid, kind: &str, xp: i32) -> Result<(), ProgressError> {
    if !valid_event(kind, xp) {
        return Err(ProgressError::InvalidEvent);
    }
    sqlx::query("INSERT INTO activity_events (user_id, kind, xp) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(kind)
        .bind(xp)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;
