//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    appointments::AppointmentsPage, contact::ContactPage, dashboard::DashboardPage, faq::FaqPage,
    home::HomePage, login::LoginPage, monitoring::MonitoringPage,
    prescriptions::PrescriptionsPage, support::SupportPage,
};
use crate::state::session::SessionState;
use crate::util::{session_store, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context once here so components read an explicit
/// object instead of an ambient singleton, then sets up client-side routing
/// with the navbar mounted above the routed outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState { user: None, loading: true });
    provide_context(session);

    // Client-side session bootstrap: persisted identity first for an instant
    // authenticated view, then a best-effort refresh from the server.
    Effect::new(move |_| {
        theme::apply(theme::read_preference());
        if let Some(user) = session_store::load_persisted_user() {
            session.update(|s| s.user = Some(user));
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Some(user) => session.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                }),
                // Keep the locally persisted view; the provider is
                // unreachable or the cookie session expired server-side.
                None => session.update(|s| s.loading = false),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        session.update(|s| s.loading = false);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/healconnect.css"/>
        <Title text="HealConnect"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("prescriptions") view=PrescriptionsPage/>
                    <Route path=StaticSegment("appointments") view=AppointmentsPage/>
                    <Route path=StaticSegment("monitoring") view=MonitoringPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("support") view=SupportPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(ParamSegment("role"), StaticSegment("dashboard"))
                        view=DashboardPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
