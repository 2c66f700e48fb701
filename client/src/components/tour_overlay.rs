//! Overlay chrome for the active tour.

#[cfg(test)]
#[path = "tour_overlay_test.rs"]
mod tour_overlay_test;

use leptos::prelude::*;

use crate::state::tour::TourState;

/// Steps per named tour. Step copy and anchor targets belong to the
/// content layer; the overlay only needs the count to know when a tour
/// finishes.
pub(crate) fn tour_step_count(name: &str) -> usize {
    match name {
        "onboarding" => 4,
        "streaks" => 2,
        _ => 1,
    }
}

/// Dimmed overlay with step position and next/skip controls, shown while a
/// tour is active. Completion and dismissal are persisted fire-and-forget;
/// a failed write only means the tour may show again.
#[component]
pub fn TourOverlay() -> impl IntoView {
    let tour = expect_context::<RwSignal<TourState>>();

    let on_next = move |_| {
        let mut finished = None;
        tour.update(|t| {
            let total = t.active.as_ref().map(|a| tour_step_count(&a.name));
            if let Some(total) = total {
                finished = t.advance(total);
            }
        });
        #[cfg(feature = "hydrate")]
        if let Some(name) = finished {
            leptos::task::spawn_local(async move {
                let _ = crate::net::api::record_tour_seen(&name, false).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = finished;
        }
    };

    let on_skip = move |_| {
        let mut dismissed = None;
        tour.update(|t| dismissed = t.dismiss());
        #[cfg(feature = "hydrate")]
        if let Some(name) = dismissed {
            leptos::task::spawn_local(async move {
                let _ = crate::net::api::record_tour_seen(&name, true).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dismissed;
        }
    };

    let position = move || {
        tour.get()
            .active
            .map(|a| format!("Step {} of {}", a.step + 1, tour_step_count(&a.name)))
            .unwrap_or_default()
    };

    view! {
        <Show when=move || tour.get().active.is_some()>
            <div class="tour-overlay">
                <div class="tour-overlay__card">
                    <span class="tour-overlay__position">{position}</span>
                    <div class="tour-overlay__actions">
                        <button class="btn" on:click=on_skip>
                            "Skip"
                        </button>
                        <button class="btn btn--primary" on:click=on_next>
                            "Next"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
