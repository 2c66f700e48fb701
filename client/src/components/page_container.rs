//! Page container applying display-mode-aware padding.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::display_mode::pad_class;

/// Main content wrapper. Padding tracks the detected display mode so the
/// installed PWA clears the status bar while browser tabs keep normal
/// gutters.
#[component]
pub fn PageContainer(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let class = move || format!("page-container {}", pad_class(ui.get().display_mode));

    view! { <main class=class>{children()}</main> }
}
