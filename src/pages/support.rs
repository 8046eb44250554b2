//! Support page.

use leptos::prelude::*;

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <section class="page__section">
            <h1>"Support"</h1>
            <p>"Live help for account and technical issues."</p>
        </section>
    }
}
