//! Top navigation bar with links, auth controls, theme toggle, and the
//! mobile hamburger menu.
//!
//! ARCHITECTURE
//! ============
//! Rendering is driven by `state::nav::NavController`, which owns the
//! menu/scrolled flags and the scroll-lock pairing. This component wires
//! browser events (window scroll, route changes, clicks) into controller
//! transitions and performs the resulting navigation. Desktop and mobile
//! render the same `NAV_LINKS` table; responsive visibility is left to the
//! stylesheet.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::theme_toggle::ThemeToggle;
use crate::state::nav::{self, NavController};
use crate::state::session::SessionState;
use crate::util::scroll_lock::DomScrollLock;
use crate::util::session_store;

/// A single top-level navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub show_icon: bool,
}

const fn link(path: &'static str, label: &'static str) -> NavLink {
    NavLink { path, label, show_icon: false }
}

/// The portal's fixed navigation set, rendered for desktop and mobile alike.
pub static NAV_LINKS: [NavLink; 7] = [
    link("/", "Home"),
    link("/prescriptions", "Prescriptions"),
    link("/appointments", "Appointments"),
    link("/monitoring", "Monitoring"),
    link("/faq", "FAQ"),
    link("/contact", "Contact"),
    NavLink { path: "/support", label: "Support", show_icon: true },
];

/// Whether `href` is the route currently shown.
fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

fn link_class(active: bool) -> &'static str {
    if active {
        "navbar__link navbar__link--active"
    } else {
        "navbar__link"
    }
}

/// Top navigation bar. Mounted once above the routed outlet.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = RwSignal::new(NavController::new(DomScrollLock));

    let pathname = use_location().pathname;

    // Close the menu whenever navigation changes the current path, so it
    // never stays open across a route transition.
    Effect::new(move |prev: Option<String>| {
        let path = pathname.get();
        if let Some(prev) = prev {
            if prev != path {
                nav.update(NavController::on_route_change);
            }
        }
        path
    });

    // Window scroll listener, detached again when the navbar unmounts.
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        /// Removes the listener (and drops the JS closure) when the
        /// component's reactive owner is cleaned up.
        struct ScrollListener {
            closure: Closure<dyn FnMut()>,
        }

        impl Drop for ScrollListener {
            fn drop(&mut self) {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        self.closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }

        let closure = Closure::<dyn FnMut()>::new(move || {
            let offset = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            nav.update(|c| c.on_scroll(offset));
        });
        let installed = web_sys::window().is_some_and(|window| {
            window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .is_ok()
        });
        if installed {
            let _scroll_guard = StoredValue::new_local(ScrollListener { closure });
        }
    }

    let navigate = use_navigate();

    let toggle_menu = move |_| nav.update(NavController::toggle_menu);
    let close_menu = move |_| nav.update(NavController::close_menu);

    let on_login = {
        let navigate = navigate.clone();
        move |_| {
            navigate(nav::login_target(), NavigateOptions::default());
            nav.update(NavController::close_menu);
        }
    };

    let on_dashboard = {
        let navigate = navigate.clone();
        move |_| {
            // Silent no-op until a role is known.
            let role = session.with(|s| s.role().map(str::to_owned));
            let Some(target) = nav::dashboard_target(role.as_deref()) else {
                return;
            };
            navigate(&target, NavigateOptions::default());
            nav.update(NavController::close_menu);
        }
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            // Local clearing always succeeds; the UI flips to the anonymous
            // view before anything else happens.
            session_store::clear();
            session.update(SessionState::clear);

            // Fire-and-forget: not awaited, ordering vs. the navigation
            // below is deliberately unspecified.
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async {
                crate::net::api::sign_out().await;
            });

            navigate(nav::login_target(), NavigateOptions::default());
            nav.update(NavController::close_menu);
        }
    };

    let on_login_mobile = on_login.clone();
    let on_dashboard_mobile = on_dashboard.clone();
    let on_logout_mobile = on_logout.clone();

    let menu_open = move || nav.with(NavController::menu_open);
    let authenticated = move || session.with(SessionState::is_authenticated);

    let navbar_class = move || {
        if nav.with(NavController::scrolled) {
            "navbar navbar--scrolled"
        } else {
            "navbar"
        }
    };
    let hamburger_class = move || {
        if menu_open() {
            "navbar__hamburger navbar__hamburger--open"
        } else {
            "navbar__hamburger"
        }
    };

    view! {
        <nav class=navbar_class>
            <div class="navbar__inner">
                <a href="/" class="navbar__brand" on:click=close_menu>
                    <span class="navbar__brand-mark" aria-hidden="true"></span>
                    <span class="navbar__brand-text">"HEALCONNECT"</span>
                </a>

                // Desktop link row; hidden below the mobile breakpoint by CSS.
                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .copied()
                        .map(|entry| {
                            view! {
                                <a
                                    href=entry.path
                                    class=move || link_class(is_active(&pathname.get(), entry.path))
                                >
                                    {entry.show_icon.then(|| view! {
                                        <span class="navbar__link-icon" aria-hidden="true">
                                            "\u{1f3a7}"
                                        </span>
                                    })}
                                    <span class="navbar__link-text">{entry.label}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="navbar__controls">
                    <div class="navbar__auth">
                        <Show
                            when=authenticated
                            fallback=move || {
                                let on_login = on_login.clone();
                                view! {
                                    <button class="navbar__button" on:click=on_login>
                                        "Login"
                                    </button>
                                }
                            }
                        >
                            <button
                                class="navbar__button navbar__button--primary"
                                on:click=on_dashboard.clone()
                            >
                                "Dashboard"
                            </button>
                            <button
                                class="navbar__button navbar__button--danger"
                                on:click=on_logout.clone()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>

                    <ThemeToggle/>

                    <button
                        class=hamburger_class
                        type="button"
                        aria-controls="mobile-menu"
                        aria-expanded=move || if menu_open() { "true" } else { "false" }
                        aria-label=move || {
                            if menu_open() { "Close navigation menu" } else { "Open navigation menu" }
                        }
                        on:click=toggle_menu
                    >
                        <span class="navbar__hamburger-line"></span>
                        <span class="navbar__hamburger-line"></span>
                        <span class="navbar__hamburger-line"></span>
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <div id="mobile-menu" class="navbar__mobile-menu">
                    {NAV_LINKS
                        .iter()
                        .copied()
                        .map(|entry| {
                            view! {
                                <a
                                    href=entry.path
                                    class="navbar__mobile-link"
                                    on:click=close_menu
                                >
                                    {entry.label}
                                </a>
                            }
                        })
                        .collect_view()}

                    <div class="navbar__mobile-auth">
                        {
                            let on_dashboard = on_dashboard_mobile.clone();
                            let on_logout = on_logout_mobile.clone();
                            view! {
                                <Show
                                    when=authenticated
                                    fallback={
                                        let on_login = on_login_mobile.clone();
                                        move || {
                                            let on_login = on_login.clone();
                                            view! {
                                                <button class="navbar__mobile-button" on:click=on_login>
                                                    "Login"
                                                </button>
                                            }
                                        }
                                    }
                                >
                                    <button
                                        class="navbar__mobile-button navbar__mobile-button--primary"
                                        on:click=on_dashboard.clone()
                                    >
                                        "Dashboard"
                                    </button>
                                    <button
                                        class="navbar__mobile-button navbar__mobile-button--danger"
                                        on:click=on_logout.clone()
                                    >
                                        "Logout"
                                    </button>
                                </Show>
                            }
                        }
                    </div>
                </div>
            </Show>
        </nav>
    }
}
