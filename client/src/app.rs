//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_fallback::ErrorFallback;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, progress::ProgressState, tour::TourState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, installs the session resolver, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let progress = RwSignal::new(ProgressState::default());
    let tour = RwSignal::new(TourState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(progress);
    provide_context(tour);

    // Classify the display mode once the browser is up.
    Effect::new(move || {
        ui.update(|u| u.display_mode = crate::util::display_mode::detect());
    });

    crate::util::auth::install_session_resolver(auth);
    crate::util::auth::install_identity_fetch(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/daybreak.css"/>
        <Title text="Daybreak"/>

        <ErrorBoundary fallback=|_| view! { <ErrorFallback/> }>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}
