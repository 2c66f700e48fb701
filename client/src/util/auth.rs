//! Session gate wiring between the resolver core and the Leptos runtime.
//!
//! SYSTEM CONTEXT
//! ==============
//! The resolution flow in `state::auth` is plain Rust; this module binds it
//! to signals: one activation per identity transition, commits gated by the
//! activation's generation, and a shared redirect for pages that send
//! guests to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, ResolutionState};

/// Identity key observed by the resolver: the current user id, if any.
///
/// Activations restart on any change to this value: absent to present,
/// present to absent, or one user to another. Resolution commits leave it
/// unchanged, so they never trigger a fresh activation.
fn identity_key(auth: &AuthState) -> Option<String> {
    auth.user.as_ref().map(|u| u.id.clone())
}

/// Drive the session resolution flow from the identity input.
///
/// Installs an effect keyed to the identity (not the whole auth state):
/// each identity transition begins a new activation, runs the
/// check→refresh chain against the HTTP probe, and commits the outcome
/// only if the activation is still current at write time. Superseded
/// activations are discarded on both ends.
pub fn install_session_resolver(auth: RwSignal<AuthState>) {
    let identity = Memo::new(move |_| auth.with(identity_key));

    Effect::new(move || {
        let identity_present = identity.get().is_some();

        let mut generation = 0;
        auth.update(|a| generation = a.begin_activation());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let probe = crate::net::api::HttpSessionProbe;
            // A disposed signal means the gate was torn down; nothing is
            // current anymore and the attempt must be discarded.
            let still_current = move || {
                auth.try_with_untracked(|a| a.current_generation() == generation)
                    .unwrap_or(false)
            };
            let resolved = crate::state::auth::resolve(identity_present, &probe, still_current).await;
            if let Some(resolution) = resolved {
                let _ = auth.try_update(|a| a.commit_resolution(generation, resolution));
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity_present, generation);
        }
    });
}

/// Populate the identity after a cookie-only authentication.
///
/// A session confirmed by check or refresh proves validity without telling
/// us who the user is. This effect fetches the profile once the gate
/// settles `Authenticated` with no known identity; the resulting identity
/// transition re-activates the resolver, which short-circuits with zero
/// network calls.
pub fn install_identity_fetch(auth: RwSignal<AuthState>) {
    let needs_identity =
        Memo::new(move |_| auth.with(|a| a.is_authenticated() && a.user.is_none()));

    Effect::new(move || {
        if !needs_identity.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(user) = crate::net::api::fetch_current_user().await {
                let _ = auth.try_update(|a| a.user = Some(user));
            }
        });
    });
}

/// Redirect to `/login` whenever the gate settles on `Guest`.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let resolution = auth.with(|a| a.resolution);
        if resolution == ResolutionState::Guest {
            navigate("/login", NavigateOptions::default());
        }
    });
}
