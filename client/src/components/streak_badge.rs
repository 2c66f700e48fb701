//! XP and streak badge.

use leptos::prelude::*;

use crate::state::progress::ProgressState;

/// Compact gamification badge: level, progress meter, and day streak.
/// Hidden until the progress summary arrives; a failed fetch just leaves
/// the badge out of the header.
#[component]
pub fn StreakBadge() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();

    let meter_style = move || format!("width: {:.0}%", progress.get().level_fraction() * 100.0);

    view! {
        <Show when=move || progress.get().summary.is_some()>
            {move || {
                progress
                    .get()
                    .summary
                    .map(|s| {
                        view! {
                            <div class="streak-badge">
                                <span class="streak-badge__level">{format!("Lv {}", s.level)}</span>
                                <div class="streak-badge__meter">
                                    <div class="streak-badge__meter-fill" style=meter_style></div>
                                </div>
                                <span class="streak-badge__streak">
                                    {format!("{} day streak", s.streak_days)}
                                </span>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
