//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page__hero">
            <h1>"Care that follows you home"</h1>
            <p>
                "Prescriptions, appointments, and remote monitoring for "
                "HealConnect patients and their care teams."
            </p>
        </section>
    }
}
