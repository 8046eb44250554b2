//! Login page with username + role sign-in.
//!
//! The authentication backend is out of scope here; signing in persists the
//! identity locally and updates the session context the same way a
//! completed remote login would.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::nav;
use crate::state::session::SessionState;
use crate::util::session_store;

/// Validate and normalize the sign-in form. Username is trimmed; both
/// fields are required.
fn validate_login(username: &str, role: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Enter a username first.");
    }
    if role.is_empty() {
        return Err("Choose a role.");
    }
    Ok((username.to_owned(), role.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (username, role) = match validate_login(&username.get(), &role.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        session_store::save(&username, &role);
        session.update(|s| {
            s.user = Some(User {
                username: username.clone(),
                role: Some(role.clone()),
            });
            s.loading = false;
        });

        let target = nav::dashboard_target(Some(&role)).unwrap_or_else(|| "/".to_owned());
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HealConnect"</h1>
                <p class="login-card__subtitle">"Sign in to your portal"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || role.get().is_empty()>
                            "Choose a role"
                        </option>
                        <option value="patient">"Patient"</option>
                        <option value="doctor">"Doctor"</option>
                    </select>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
