//! Mobile navigation drawer.

use leptos::prelude::*;

use crate::components::app_link::AppLink;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;

/// Slide-in navigation drawer for narrow viewports. Opens from the page
/// header's menu button; a backdrop click or any navigation closes it.
#[component]
pub fn NavDrawer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let close = move |_| ui.update(|u| u.close_nav());

    let on_logout = move |_| {
        ui.update(|u| u.close_nav());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // Dropping the identity restarts the gate; with the session
            // gone it settles Guest and the redirect takes over.
            auth.update(|a| a.user = None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    let user_name = move || {
        auth.get()
            .user
            .map_or_else(|| "Member".to_owned(), |u| u.name)
    };

    view! {
        <Show when=move || ui.get().nav_open>
            <div class="nav-drawer__backdrop" on:click=close></div>
            <nav class="nav-drawer">
                <div class="nav-drawer__identity">{user_name}</div>
                <ul class="nav-drawer__links" on:click=close>
                    <li>
                        <AppLink href="/">"Today"</AppLink>
                    </li>
                    <li>
                        <AppLink href="/?tour=onboarding">"Replay the tour"</AppLink>
                    </li>
                    <li>
                        <AppLink href="https://support.example.com">"Help center"</AppLink>
                    </li>
                </ul>
                <button class="nav-drawer__logout btn" on:click=on_logout>
                    "Sign out"
                </button>
            </nav>
        </Show>
    }
}
