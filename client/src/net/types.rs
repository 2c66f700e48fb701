//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field for field so serde
//! round-trips stay lossless and API helpers can stay schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the session endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, if the account has one.
    pub email: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// XP and streak summary rendered by the gamification badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
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

/// Per-user tour completion state.
///
/// Tour step content is owned by the presentation layer; the server only
/// tracks which named tours this user has finished or waved away.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourStatus {
    /// Tours the user completed.
    #[serde(default)]
    pub completed: Vec<String>,
    /// Tours the user dismissed without finishing.
    #[serde(default)]
    pub dismissed: Vec<String>,
}

impl TourStatus {
    /// Whether the named tour was either completed or dismissed.
    #[must_use]
    pub fn is_seen(&self, tour: &str) -> bool {
        self.completed.iter().any(|t| t == tour) || self.dismissed.iter().any(|t| t == tour)
    }
}
