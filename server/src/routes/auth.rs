//! Auth routes — session check/refresh, email-code login, logout.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::services::email_auth::{self, EmailAuthError};
use crate::services::session;
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

fn email_code_echo_enabled() -> bool {
    env_bool("EMAIL_CODE_ECHO").unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — the session check. Returns the current user when
/// the cookie still authenticates, 401 otherwise.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/refresh` — the session refresh. Rotates a token whose
/// renewal horizon is open, re-issues the cookie, and returns the user;
/// 401 when the token is unknown or past renewal.
pub async fn refresh(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match session::rotate_session(&state.pool, token).await {
        Ok(Some((new_token, user))) => {
            let jar = CookieJar::new().add(session_cookie(new_token, cookie_secure()));
            (jar, Json(user)).into_response()
        }
        Ok(None) => StatusCode::UNAUTHORIZED.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session rotation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct RequestCodeBody {
    email: String,
}

#[derive(Serialize)]
struct RequestCodeResponse {
    ok: bool,
    /// Plaintext code, echoed only when `EMAIL_CODE_ECHO` is enabled
    /// (local development without email delivery).
    code: Option<String>,
}

/// `POST /api/auth/email/request-code` — issue and deliver a sign-in code.
pub async fn request_email_code(State(state): State<AppState>, Json(body): Json<RequestCodeBody>) -> Response {
    let Some(to) = email_auth::normalize_email(&body.email) else {
        return (StatusCode::BAD_REQUEST, "invalid email").into_response();
    };

    let code = match email_auth::request_login_code(&state.pool, &to).await {
        Ok(code) => code,
        Err(EmailAuthError::InvalidEmail) => {
            return (StatusCode::BAD_REQUEST, "invalid email").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "login code request failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Some(config) = &state.email {
        if let Err(e) = email_auth::send_login_code_email(config, &to, &code).await {
            tracing::error!(error = %e, "login code delivery failed");
            return (StatusCode::BAD_GATEWAY, "email delivery failed").into_response();
        }
    } else {
        tracing::warn!("email delivery not configured; login code not sent");
    }

    let echoed = email_code_echo_enabled().then_some(code);
    Json(RequestCodeResponse { ok: true, code: echoed }).into_response()
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    email: String,
    code: String,
}

#[derive(Serialize)]
struct VerifyCodeResponse {
    ok: bool,
}

/// `POST /api/auth/email/verify-code` — consume a sign-in code and open a
/// session. Verification failures collapse into one 401 so responses leak
/// nothing about which codes exist.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Response {
    let user_id = match email_auth::verify_login_code(&state.pool, &body.email, &body.code).await {
        Ok(id) => id,
        Err(EmailAuthError::InvalidEmail | EmailAuthError::InvalidCode | EmailAuthError::VerificationFailed) => {
            return (StatusCode::UNAUTHORIZED, "invalid email or code").into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "code verification failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let jar = jar.add(session_cookie(token, cookie_secure()));
    (jar, Json(VerifyCodeResponse { ok: true })).into_response()
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let jar = CookieJar::new().add(expired_session_cookie(cookie_secure()));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
