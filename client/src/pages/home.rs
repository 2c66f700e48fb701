//! Home page — the gated daily view.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::nav_drawer::NavDrawer;
use crate::components::page_container::PageContainer;
use crate::components::session_gate::SessionGate;
use crate::components::streak_badge::StreakBadge;
use crate::components::tour_overlay::TourOverlay;
use crate::state::auth::AuthState;
use crate::state::progress::ProgressState;
use crate::state::tour::TourState;
use crate::state::ui::UiState;

/// Protected landing page. Guests are redirected to `/login`; once the
/// gate opens, the badge data and tour state load and the tour manager
/// decides whether anything should launch.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let progress = expect_context::<RwSignal<ProgressState>>();
    let tour = expect_context::<RwSignal<TourState>>();

    let navigate = use_navigate();
    crate::util::auth::install_guest_redirect(auth, navigate);

    // One-shot load of badge data and tour state after the gate opens.
    let authenticated = Memo::new(move |_| auth.with(AuthState::is_authenticated));
    let search = use_location().search;
    Effect::new(move || {
        if !authenticated.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let requested = crate::util::tour::tour_from_query(&search.get_untracked());
            leptos::task::spawn_local(async move {
                progress.update(|p| p.loading = true);
                let summary = crate::net::api::fetch_progress().await;
                progress.update(|p| {
                    p.summary = summary;
                    p.loading = false;
                });

                let status = crate::net::api::fetch_tour_status().await.unwrap_or_default();
                let launch = crate::util::tour::tour_to_launch(requested.as_deref(), &status);
                tour.update(|t| {
                    t.status = Some(status);
                    if let Some(name) = &launch {
                        t.launch(name);
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (search, progress, tour);
        }
    });

    let on_menu = move |_| ui.update(|u| u.toggle_nav());

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Good morning".to_owned(), |u| format!("Good morning, {}", u.name))
    };

    view! {
        <SessionGate>
            <PageContainer>
                <header class="home-page__header">
                    <button class="icon-button" on:click=on_menu aria-label="Open menu">
                        <svg class="icon-button__glyph" viewBox="0 0 20 20" aria-hidden="true">
                            <line x1="3" y1="5" x2="17" y2="5"></line>
                            <line x1="3" y1="10" x2="17" y2="10"></line>
                            <line x1="3" y1="15" x2="17" y2="15"></line>
                        </svg>
                    </button>
                    <h1>"Today"</h1>
                    <StreakBadge/>
                </header>
                <section class="home-page__body">
                    <h2>{greeting}</h2>
                    <p>"Your daily practice is ready."</p>
                    <a class="btn btn--primary" href="/?tour=onboarding">
                        "Show me around"
                    </a>
                </section>
            </PageContainer>
            <NavDrawer/>
            <TourOverlay/>
        </SessionGate>
    }
}
