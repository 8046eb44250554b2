//! Prescriptions overview page.

use leptos::prelude::*;

#[component]
pub fn PrescriptionsPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"Prescriptions"</h1>
            <p>"Active prescriptions and refill requests."</p>
        </section>
    }
}
