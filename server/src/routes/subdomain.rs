//! Subdomain request flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Daybreak serves multiple hosts from one deployment (`www`, `app`,
//! `admin`). Handlers that care which one was addressed take [`Subdomain`]
//! as a parameter; extraction never fails, it just reports `None` for the
//! apex, unknown hosts, or an unconfigured base domain.

#[cfg(test)]
#[path = "subdomain_test.rs"]
mod tests;

use axum::http::header::HOST;

/// Base domain the deployment is reachable under, from `BASE_DOMAIN`.
/// `None` in development setups that talk to bare localhost.
pub(crate) fn base_domain() -> Option<String> {
    std::env::var("BASE_DOMAIN")
        .ok()
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty())
}

fn strip_port(host: &str) -> &str {
    host.rsplit_once(':').map_or(host, |(name, _)| name)
}

/// Extract the subdomain labels of `host` relative to `base`.
///
/// `app.daybreak.example` against `daybreak.example` yields `app`; the
/// apex and hosts outside the base domain yield `None`.
pub(crate) fn subdomain_from_host(host: &str, base: &str) -> Option<String> {
    let host = strip_port(host.trim()).to_ascii_lowercase();
    if host == base {
        return None;
    }
    let prefix = host.strip_suffix(base)?.strip_suffix('.')?;
    if prefix.is_empty() {
        return None;
    }
    Some(prefix.to_owned())
}

/// Subdomain the request was addressed to, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdomain(pub Option<String>);

impl<S> axum::extract::FromRequestParts<S> for Subdomain
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let host = parts
            .headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let sub = base_domain().and_then(|base| subdomain_from_host(host, &base));
        Ok(Self(sub))
    }
}
