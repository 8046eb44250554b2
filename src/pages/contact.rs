//! Contact page.

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"Contact"</h1>
            <p>"Reach your clinic or the portal team."</p>
        </section>
    }
}
