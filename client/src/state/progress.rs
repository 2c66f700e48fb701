//! Gamification state backing the XP/streak badge.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::net::types::ProgressSummary;

/// Progress state for the current user. Populated after authentication by
/// a one-shot fetch; the badge hides itself while `summary` is absent.
#[derive(Clone, Debug, Default)]
pub struct ProgressState {
    /// Latest summary from the server, if fetched.
    pub summary: Option<ProgressSummary>,
    /// Whether a fetch is in flight.
    pub loading: bool,
}

impl ProgressState {
    /// Fraction of the current level completed, in `0.0..=1.0`.
    /// Used for the badge's level meter.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn level_fraction(&self) -> f64 {
        match &self.summary {
            Some(s) if s.xp_for_next_level > 0 => {
                (s.xp_into_level as f64 / s.xp_for_next_level as f64).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
