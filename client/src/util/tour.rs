//! Tour launch decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two inputs drive whether a tour appears: an explicit `?tour=name` URL
//! parameter (deep links from emails and help articles) and the user's
//! completion state. The onboarding tour additionally self-launches for
//! users who have never seen it.

#[cfg(test)]
#[path = "tour_test.rs"]
mod tour_test;

use crate::net::types::TourStatus;

/// Name of the tour that self-launches for new users.
pub const ONBOARDING_TOUR: &str = "onboarding";

const MAX_TOUR_NAME_LEN: usize = 64;

/// Whether a string is a well-formed tour name (lowercase alphanumeric
/// plus dashes, bounded length). Malformed URL values are ignored rather
/// than rejected loudly.
#[must_use]
pub fn valid_tour_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_TOUR_NAME_LEN
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Extract a requested tour name from a URL query string.
///
/// Accepts the query with or without its leading `?`. Returns `None` when
/// no `tour` parameter is present or its value is malformed.
#[must_use]
pub fn tour_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == "tour" && valid_tour_name(value) {
            return Some(value.to_owned());
        }
    }
    None
}

/// Decide which tour (if any) to launch for this page view.
///
/// An explicit request always launches, even for a tour the user has seen
/// before; a deep link means "show me this again". Without a request, the
/// onboarding tour launches once for users who have neither completed nor
/// dismissed it.
#[must_use]
pub fn tour_to_launch(requested: Option<&str>, status: &TourStatus) -> Option<String> {
    if let Some(name) = requested {
        return Some(name.to_owned());
    }
    if status.is_seen(ONBOARDING_TOUR) {
        None
    } else {
        Some(ONBOARDING_TOUR.to_owned())
    }
}
