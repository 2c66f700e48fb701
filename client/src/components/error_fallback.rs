//! Fallback view for render errors caught by the error boundary.

use leptos::prelude::*;

/// Generic recovery surface. Render errors never expose details to the
/// user; reloading restarts the session resolution from scratch.
#[component]
pub fn ErrorFallback() -> impl IntoView {
    view! {
        <div class="error-fallback">
            <h2>"Something went wrong."</h2>
            <p>"Reload the page to continue."</p>
        </div>
    }
}
