//! Role dashboard page, reached at `/{role}/dashboard`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::session::SessionState;

/// Heading for a role dashboard, e.g. `"Doctor dashboard"`.
fn dashboard_heading(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => format!("{}{} dashboard", first.to_uppercase(), chars.as_str()),
        None => "Dashboard".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let heading = move || {
        let role = params.with(|p| p.get("role")).unwrap_or_default();
        dashboard_heading(&role)
    };
    let greeting = move || {
        session.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Signed in as {}", u.username))
                .unwrap_or_else(|| "Not signed in".to_owned())
        })
    };

    view! {
        <section class="page__section">
            <h1>{heading}</h1>
            <p class="page__greeting">{greeting}</p>
        </section>
    }
}
