//! Authentication gate wrapping protected page content.

use leptos::prelude::*;

use crate::state::auth::{AuthState, ResolutionState};

/// Render children only once the session resolution settles
/// `Authenticated`. While `Checking`, a neutral placeholder holds the
/// layout; `Guest` shows a sign-in prompt (pages that prefer a redirect
/// install `util::auth::install_guest_redirect` alongside).
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || match auth.get().resolution {
            ResolutionState::Checking => view! {
                <div class="session-gate session-gate--checking" aria-busy="true">
                    <div class="session-gate__spinner"></div>
                </div>
            }
            .into_any(),
            ResolutionState::Authenticated => children(),
            ResolutionState::Guest => view! {
                <div class="session-gate session-gate--guest">
                    <p>"Sign in to continue."</p>
                    <a class="btn btn--primary" href="/login">
                        "Sign in"
                    </a>
                </div>
            }
            .into_any(),
        }}
    }
}
