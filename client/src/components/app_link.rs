//! Link helper distinguishing in-app routes from external URLs.

#[cfg(test)]
#[path = "app_link_test.rs"]
mod app_link_test;

use leptos::prelude::*;

/// Whether a link target leaves the app.
pub(crate) fn is_external_href(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Anchor wrapper: external targets open in a new tab with the opener
/// severed; in-app targets navigate normally.
#[component]
pub fn AppLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    if is_external_href(&href) {
        view! {
            <a class="app-link app-link--external" href=href target="_blank" rel="noopener noreferrer">
                {children()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <a class="app-link" href=href>
                {children()}
            </a>
        }
        .into_any()
    }
}
