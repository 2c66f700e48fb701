//! Email delivery diagnostic.
//!
//! A production-path test send, reachable only when `EMAIL_DIAGNOSTIC` is
//! enabled and, on deployments with a configured base domain, only via the
//! admin subdomain. Disabled configurations answer 404 so the endpoint is
//! indistinguishable from an unknown route.

#[cfg(test)]
#[path = "diag_test.rs"]
mod tests;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::routes::auth::env_bool;
use crate::routes::subdomain::{Subdomain, base_domain};
use crate::services::email_auth;
use crate::state::AppState;

fn email_diagnostic_enabled() -> bool {
    env_bool("EMAIL_DIAGNOSTIC").unwrap_or(false)
}

/// Gate for the diagnostic: the env flag must be on, and when a base
/// domain is configured the request must arrive on the admin subdomain.
pub(crate) fn diagnostic_allowed(enabled: bool, base_configured: bool, subdomain: Option<&str>) -> bool {
    enabled && (!base_configured || subdomain == Some("admin"))
}

#[derive(Deserialize)]
pub struct EmailTestBody {
    to: String,
}

#[derive(Serialize)]
struct EmailTestResponse {
    ok: bool,
}

/// `POST /api/dev/email-test` — send a test message through the production
/// Resend path and report delivery success.
pub async fn email_test(
    State(state): State<AppState>,
    subdomain: Subdomain,
    Json(body): Json<EmailTestBody>,
) -> Response {
    let allowed = diagnostic_allowed(
        email_diagnostic_enabled(),
        base_domain().is_some(),
        subdomain.0.as_deref(),
    );
    if !allowed {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(to) = email_auth::normalize_email(&body.to) else {
        return (StatusCode::BAD_REQUEST, "invalid email").into_response();
    };

    let Some(config) = &state.email else {
        return (StatusCode::SERVICE_UNAVAILABLE, "email delivery not configured").into_response();
    };

    match email_auth::send_test_email(config, &to).await {
        Ok(()) => {
            tracing::info!(%to, "diagnostic email delivered");
            Json(EmailTestResponse { ok: true }).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, %to, "diagnostic email failed");
            (StatusCode::BAD_GATEWAY, "email delivery failed").into_response()
        }
    }
}
