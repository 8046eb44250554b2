//! REST helpers for the session provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so session resolution
//! degrades to the anonymous view without crashing hydration. Sign-out is
//! fire-and-forget: remote failure never blocks or alters local logout.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Invalidate the remote session via `POST /api/auth/logout`. The result is
/// intentionally ignored; local state is already cleared by the caller.
pub async fn sign_out() {
    #[cfg(feature = "hydrate")]
    {
        if gloo_net::http::Request::post("/api/auth/logout").send().await.is_err() {
            log::debug!("remote sign-out failed; local session already cleared");
        }
    }
}
