//! Frequently asked questions.

use leptos::prelude::*;

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"FAQ"</h1>
            <p>"Answers to common questions about the portal."</p>
        </section>
    }
}
