//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::util::theme;

/// Theme toggle shown in the navbar control cluster.
///
/// SSR renders the light state; the persisted preference is picked up after
/// hydration.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(false);

    Effect::new(move |_| {
        let preferred = theme::read_preference();
        if preferred != dark.get_untracked() {
            theme::apply(preferred);
            dark.set(preferred);
        }
    });

    let on_toggle = move |_| {
        let next = theme::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <button
            class="theme-toggle"
            type="button"
            aria-label=move || {
                if dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
            }
            on:click=on_toggle
        >
            {move || if dark.get() { "\u{263d}" } else { "\u{2600}" }}
        </button>
    }
}
