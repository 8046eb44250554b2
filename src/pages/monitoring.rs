//! Remote monitoring page.

use leptos::prelude::*;

#[component]
pub fn MonitoringPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"Monitoring"</h1>
            <p>"Vitals and device readings shared with your care team."</p>
        </section>
    }
}
