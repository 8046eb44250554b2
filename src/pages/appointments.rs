//! Appointments page.

use leptos::prelude::*;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"Appointments"</h1>
            <p>"Upcoming visits and scheduling."</p>
        </section>
    }
}
