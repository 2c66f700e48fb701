//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included
//! by the browser. Server-side (SSR): stubs returning `None`/`Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result`/`ProbeOutcome` outputs instead of panics
//! so auth and data fetch failures degrade UI behavior without crashing
//! hydration. The session probes in particular must never error: the gate
//! treats every failure as "confirmation unavailable".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ProgressSummary, TourStatus, User};
use crate::state::auth::{ProbeOutcome, SessionProbe};

/// Map an HTTP success flag (2xx) to a probe outcome.
#[cfg(any(test, feature = "hydrate"))]
fn probe_outcome_from_ok(ok: bool) -> ProbeOutcome {
    if ok { ProbeOutcome::Confirmed } else { ProbeOutcome::Unavailable }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_code_failed_message(status: u16) -> String {
    format!("request code failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_code_failed_message(status: u16) -> String {
    format!("verify code failed: {status}")
}

// =============================================================================
// SESSION PROBES
// =============================================================================

/// Ask the server whether the current session cookie is still valid via
/// `GET /api/auth/me`. Only the status matters to the gate.
pub async fn probe_session_check() -> ProbeOutcome {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get("/api/auth/me").send().await {
            Ok(resp) => probe_outcome_from_ok(resp.ok()),
            Err(_) => ProbeOutcome::Unavailable,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ProbeOutcome::Unavailable
    }
}

/// Ask the server to rotate the session via `POST /api/auth/refresh`.
/// On success the server re-issues the cookie; the body is ignored.
pub async fn probe_session_refresh() -> ProbeOutcome {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post("/api/auth/refresh").send().await {
            Ok(resp) => probe_outcome_from_ok(resp.ok()),
            Err(_) => ProbeOutcome::Unavailable,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ProbeOutcome::Unavailable
    }
}

/// Production [`SessionProbe`] backed by the HTTP session endpoints.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpSessionProbe;

impl SessionProbe for HttpSessionProbe {
    async fn check(&self) -> ProbeOutcome {
        probe_session_check().await
    }

    async fn refresh(&self) -> ProbeOutcome {
        probe_session_refresh().await
    }
}

// =============================================================================
// IDENTITY / LOGIN
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct RequestCodeResponse {
    ok: bool,
    code: Option<String>,
}

/// Request a 6-character sign-in code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo
/// codes (local development without email delivery).
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_code_failed_message(resp.status()));
        }
        let body: RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct VerifyCodeResponse {
    ok: bool,
}

/// Verify a sign-in code via `POST /api/auth/email/verify-code`. On success
/// the server sets the session cookie.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(verify_code_failed_message(resp.status()));
        }
        let body: VerifyCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("verify code failed".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

// =============================================================================
// PROGRESS / TOUR
// =============================================================================

/// Fetch the XP/streak summary from `/api/progress`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_progress() -> Option<ProgressSummary> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/progress").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<ProgressSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the user's tour completion state from `/api/tour`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_tour_status() -> Option<TourStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/tour").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TourStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Record a tour as completed or dismissed via `POST /api/tour`.
/// Returns `true` on success; failures only cost a re-shown tour.
pub async fn record_tour_seen(tour: &str, dismissed: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "tour": tour, "dismissed": dismissed });
        let Ok(req) = gloo_net::http::Request::post("/api/tour").json(&payload) else {
            return false;
        };
        match req.send().await {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tour, dismissed);
        false
    }
}
